use askama::Template;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::layouts::SlideLayout;
use crate::layouts::theme::{WARM, WIDESCREEN};
use crate::templates_structs::slides::FourStepProcessTemplate;

pub struct FourStepProcess;

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FourStepProcessContent {
    #[serde(default = "default_title")]
    #[schemars(length(min = 3, max = 100), description = "Main title. Max 8 words")]
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(length(min = 10, max = 400), description = "Optional subtitle. Max 20 words")]
    pub subtitle: Option<String>,
    #[serde(default = "default_steps")]
    #[schemars(length(equal = 4), description = "Four sequential steps")]
    pub steps: Vec<ProcessStage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(length(max = 250), description = "Optional footer summary. Max 15 words")]
    pub footer_text: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct ProcessStage {
    #[schemars(length(min = 3, max = 80), description = "Step label. Max 5 words")]
    pub label: String,
    #[schemars(length(min = 10, max = 250), description = "Step description. Max 15 words")]
    pub description: String,
}

fn step(label: &str, description: &str) -> ProcessStage {
    ProcessStage { label: label.into(), description: description.into() }
}

fn default_title() -> String {
    "Our Process".into()
}

fn default_steps() -> Vec<ProcessStage> {
    vec![
        step("Identify Key Requirements", "Extract essential compliance obligations from regulatory text, focusing on specific actions and timelines"),
        step("Translate to Plain Language", "Convert legal terminology into clear, everyday language that can be understood by all team members"),
        step("Create Actionable Steps", "Develop specific, measurable actions that departments can implement to ensure compliance"),
        step("Validate Understanding", "Confirm interpretation accuracy through cross-departmental review and feedback"),
    ]
}

impl SlideLayout for FourStepProcess {
    const ID: &'static str = "ab4c-new-four-step-process";
    const NAME: &'static str = "Four Step Process";
    const DESCRIPTION: &'static str = "Sequential four-step process flow with arrows. Perfect for workflows, procedures, or methodological approaches.";

    type Content = FourStepProcessContent;

    fn render(content: &FourStepProcessContent) -> askama::Result<String> {
        FourStepProcessTemplate { layout_id: Self::ID, frame: &WIDESCREEN, palette: &WARM, content }.render()
    }
}

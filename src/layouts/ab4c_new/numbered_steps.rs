use askama::Template;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::layouts::SlideLayout;
use crate::layouts::theme::{WARM, WIDESCREEN};
use crate::templates_structs::slides::NumberedStepsTemplate;

pub struct NumberedSteps;

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NumberedStepsContent {
    #[serde(default = "default_title")]
    #[schemars(length(min = 3, max = 100), description = "Main title. Max 8 words")]
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(length(min = 10, max = 600), description = "Optional subtitle or introduction. Max 30 words")]
    pub subtitle: Option<String>,
    #[serde(default = "default_steps")]
    #[schemars(length(min = 4, max = 6), description = "Sequential steps. 4-6 items")]
    pub steps: Vec<NumberedStep>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(length(max = 400), description = "Optional footer summary. Max 20 words")]
    pub footer_text: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct NumberedStep {
    #[schemars(length(min = 3, max = 50), description = "Step heading. Max 6 words")]
    pub heading: String,
    #[schemars(length(min = 10, max = 400), description = "Step description. Max 20 words")]
    pub description: String,
}

fn step(heading: &str, description: &str) -> NumberedStep {
    NumberedStep { heading: heading.into(), description: description.into() }
}

fn default_title() -> String {
    "Implementation Steps".into()
}

fn default_steps() -> Vec<NumberedStep> {
    vec![
        step("Identify Key Requirements", "Extract essential compliance obligations from regulatory text, focusing on specific actions, timelines, and responsibilities"),
        step("Translate to Plain Language", "Convert legal terminology into clear, everyday language that can be understood by all team members regardless of their regulatory background"),
        step("Create Actionable Steps", "Develop specific, measurable actions that departments can implement to ensure compliance with regulatory requirements"),
        step("Validate Understanding", "Confirm interpretation accuracy through cross-departmental review and feedback to ensure consistent understanding across teams"),
    ]
}

impl SlideLayout for NumberedSteps {
    const ID: &'static str = "ab4c-new-numbered-steps";
    const NAME: &'static str = "Numbered Steps";
    const DESCRIPTION: &'static str = "Clean numbered list layout with steps and descriptions. Perfect for sequential instructions or methodical approaches.";

    type Content = NumberedStepsContent;

    fn render(content: &NumberedStepsContent) -> askama::Result<String> {
        NumberedStepsTemplate { layout_id: Self::ID, frame: &WIDESCREEN, palette: &WARM, content }.render()
    }
}

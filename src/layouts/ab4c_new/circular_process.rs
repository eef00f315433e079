use askama::Template;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::layouts::SlideLayout;
use crate::layouts::theme::{WARM, WIDESCREEN};
use crate::templates_structs::slides::CircularProcessTemplate;

pub struct CircularProcess;

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CircularProcessContent {
    #[serde(default = "default_title")]
    #[schemars(length(min = 3, max = 100), description = "Main title. Max 8 words")]
    pub title: String,
    #[serde(default = "default_center_label")]
    #[schemars(length(min = 3, max = 40), description = "Center label. Max 5 words")]
    pub center_label: String,
    #[serde(default = "default_steps")]
    #[schemars(length(min = 4, max = 6), description = "Process steps. 4-6 steps")]
    pub steps: Vec<CycleStep>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(length(max = 250), description = "Optional summary text. Max 15 words")]
    pub summary_text: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct CycleStep {
    #[schemars(length(min = 3, max = 30), description = "Step label. Max 4 words")]
    pub label: String,
    #[schemars(length(min = 10, max = 200), description = "Step description. Max 10 words")]
    pub description: String,
}

impl CircularProcessContent {
    /// Steps either side of the centre circle; the left column gets the extra one.
    pub fn columns(&self) -> (&[CycleStep], &[CycleStep]) {
        self.steps.split_at(self.steps.len().div_ceil(2))
    }
}

fn step(label: &str, description: &str) -> CycleStep {
    CycleStep { label: label.into(), description: description.into() }
}

fn default_title() -> String {
    "Compliance Cycle".into()
}

fn default_center_label() -> String {
    "Continuous Improvement".into()
}

fn default_steps() -> Vec<CycleStep> {
    vec![
        step("Plan", "Identify compliance requirements and objectives"),
        step("Execute", "Implement compliance procedures and controls"),
        step("Monitor", "Track performance and identify issues"),
        step("Review", "Assess effectiveness and adjust approach"),
    ]
}

impl SlideLayout for CircularProcess {
    const ID: &'static str = "ab4c-new-circular-process";
    const NAME: &'static str = "Circular Process";
    const DESCRIPTION: &'static str = "Cyclical process layout with center focus and steps positioned around it. Perfect for continuous improvement cycles or balanced frameworks.";

    type Content = CircularProcessContent;

    fn render(content: &CircularProcessContent) -> askama::Result<String> {
        CircularProcessTemplate { layout_id: Self::ID, frame: &WIDESCREEN, palette: &WARM, content }.render()
    }
}

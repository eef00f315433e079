use askama::Template;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::layouts::SlideLayout;
use crate::layouts::common::IconRef;
use crate::layouts::theme::{WARM, WIDESCREEN};
use crate::templates_structs::slides::ProcessFlowTemplate;

pub struct ProcessFlow;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum FlowDirection {
    #[default]
    Horizontal,
    Vertical,
}

impl FlowDirection {
    pub fn is_vertical(&self) -> bool {
        *self == FlowDirection::Vertical
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FlowDirection::Horizontal => "horizontal",
            FlowDirection::Vertical => "vertical",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ProcessFlowContent {
    #[serde(default = "default_title")]
    #[schemars(length(min = 3, max = 80), description = "Main process title")]
    pub process_title: String,
    #[serde(default = "default_description", skip_serializing_if = "Option::is_none")]
    #[schemars(length(min = 10, max = 200), description = "Optional process description")]
    pub process_description: Option<String>,
    #[serde(default)]
    #[schemars(description = "Direction of process flow")]
    pub flow_direction: FlowDirection,
    #[serde(default = "default_steps")]
    #[schemars(length(min = 3, max = 6), description = "Process steps with titles, descriptions, and icons")]
    pub steps: Vec<ProcessStep>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct ProcessStep {
    #[schemars(length(min = 3, max = 50))]
    pub title: String,
    #[schemars(length(min = 10, max = 150))]
    pub description: String,
    #[serde(default = "default_step_icon")]
    pub icon: IconRef,
}

fn step(title: &str, description: &str, icon: IconRef) -> ProcessStep {
    ProcessStep { title: title.into(), description: description.into(), icon }
}

fn default_title() -> String {
    "Implementation Process".into()
}

fn default_description() -> Option<String> {
    Some("Follow these steps to ensure successful implementation and optimal results".into())
}

fn default_step_icon() -> IconRef {
    IconRef::bold("arrow-right", "arrow step process")
}

fn default_steps() -> Vec<ProcessStep> {
    vec![
        step("Analysis", "Assess current situation and identify opportunities for improvement", IconRef::bold("magnifying-glass", "search analysis magnifying")),
        step("Planning", "Develop comprehensive strategy and allocate necessary resources", IconRef::bold("clipboard", "clipboard planning document")),
        step("Execution", "Implement the plan with clear milestones and accountability", IconRef::bold("play", "play execute action")),
        step("Monitoring", "Track progress and adjust approach based on real-time feedback", IconRef::bold("eye", "eye monitor watch")),
        step("Optimization", "Refine processes and implement continuous improvements", IconRef::bold("gear", "gear settings optimize")),
    ]
}

impl SlideLayout for ProcessFlow {
    const ID: &'static str = "06-process-flow-slide";
    const NAME: &'static str = "Process Flow";
    const DESCRIPTION: &'static str = "Step-by-step workflow visualization with arrows and icons. Ideal for explaining procedures, methodologies, or sequential processes in training.";

    type Content = ProcessFlowContent;

    fn render(content: &ProcessFlowContent) -> askama::Result<String> {
        ProcessFlowTemplate { layout_id: Self::ID, frame: &WIDESCREEN, palette: &WARM, content }.render()
    }
}

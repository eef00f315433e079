use askama::Template;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::layouts::SlideLayout;
use crate::layouts::common::IconRef;
use crate::layouts::theme::{WARM, WIDESCREEN};
use crate::templates_structs::slides::KeyTakeawaysTemplate;

pub struct KeyTakeaways;

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct KeyTakeawaysContent {
    #[serde(default = "default_takeaways")]
    #[schemars(length(min = 3, max = 4), description = "3-4 key takeaway points with icons")]
    pub takeaways: Vec<Takeaway>,
    #[serde(default = "default_next_steps", skip_serializing_if = "Option::is_none")]
    #[schemars(length(min = 20, max = 300), description = "Optional next steps or follow-up information. Max 300 characters")]
    pub next_steps: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct Takeaway {
    #[schemars(length(min = 10, max = 200), description = "Key takeaway point. Max 200 characters for optimal display")]
    pub point: String,
    // An omitted icon falls back to the check-circle.
    #[serde(default = "default_icon")]
    #[schemars(description = "Icon to represent this takeaway")]
    pub icon: IconRef,
}

fn takeaway(point: &str, icon: IconRef) -> Takeaway {
    Takeaway { point: point.into(), icon }
}

fn default_icon() -> IconRef {
    IconRef::bold("check-circle", "key point icon")
}

fn default_takeaways() -> Vec<Takeaway> {
    vec![
        takeaway("Always document compliance issues through proper channels", IconRef::bold("clipboard", "documentation")),
        takeaway("Regular training updates are essential for maintaining standards", IconRef::bold("chart-line", "continuous improvement")),
        takeaway("Cross-department collaboration improves overall compliance", IconRef::bold("handshake", "collaboration")),
    ]
}

fn default_next_steps() -> Option<String> {
    Some("Apply these principles in your daily work. Your next training session is scheduled for Q2 2025.".into())
}

impl SlideLayout for KeyTakeaways {
    const ID: &'static str = "10-key-takeaways";
    const NAME: &'static str = "Key Takeaways";
    const DESCRIPTION: &'static str = "Bulleted summary list of main points. Use to conclude sections or presentations and reinforce learning.";

    type Content = KeyTakeawaysContent;

    fn render(content: &KeyTakeawaysContent) -> askama::Result<String> {
        KeyTakeawaysTemplate { layout_id: Self::ID, frame: &WIDESCREEN, palette: &WARM, content }.render()
    }
}

use askama::Template;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::layouts::SlideLayout;
use crate::layouts::theme::{WARM, WIDESCREEN};
use crate::templates_structs::slides::HorizontalTimelineTemplate;

pub struct HorizontalTimeline;

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct HorizontalTimelineContent {
    #[serde(default = "default_title")]
    #[schemars(length(min = 3, max = 100), description = "Main title. Max 8 words")]
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(length(min = 10, max = 600), description = "Optional subtitle or introduction. Max 30 words")]
    pub subtitle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(length(min = 10, max = 400), description = "Optional description above timeline. Max 20 words")]
    pub top_description: Option<String>,
    #[serde(default = "default_phases")]
    #[schemars(length(equal = 4), description = "Four timeline phases")]
    pub phases: Vec<Phase>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(length(min = 3, max = 40), description = "Optional key learning heading. Max 6 words")]
    pub key_learning: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(length(min = 10, max = 400), description = "Optional key learning text. Max 20 words")]
    pub learning_text: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct Phase {
    #[schemars(length(min = 1, max = 2), description = "Phase number (1, 2, 3, 4)")]
    pub number: String,
    #[schemars(length(min = 3, max = 80), description = "Phase label. Max 5 words")]
    pub label: String,
    #[schemars(length(min = 10, max = 250), description = "Phase description. Max 15 words")]
    pub description: String,
}

impl HorizontalTimelineContent {
    /// The learning box needs its text; the heading has a fallback.
    pub fn learning(&self) -> Option<(&str, &str)> {
        let text = self.learning_text.as_deref()?;
        Some((self.key_learning.as_deref().unwrap_or("Key Learning Outcomes"), text))
    }
}

fn phase(number: &str, label: &str, description: &str) -> Phase {
    Phase { number: number.into(), label: label.into(), description: description.into() }
}

fn default_title() -> String {
    "Exercise Structure".into()
}

fn default_phases() -> Vec<Phase> {
    vec![
        phase("1", "Scenario Assignment", "Teams receive compliance update scenarios requiring communication to specific audiences"),
        phase("2", "Preparation Phase", "Teams develop communication strategies appropriate to their assigned audience"),
        phase("3", "Delivery Practice", "Teams present their compliance updates to role-play audiences, receiving real-time feedback"),
        phase("4", "Reflection and Learning", "Participants discuss challenges encountered and strategies developed for future communications"),
    ]
}

impl SlideLayout for HorizontalTimeline {
    const ID: &'static str = "ab4c-new-horizontal-timeline";
    const NAME: &'static str = "Horizontal Timeline";
    const DESCRIPTION: &'static str = "Horizontal timeline with numbered phases or stages. Perfect for exercise structures, workshop agendas, or phased implementations.";

    type Content = HorizontalTimelineContent;

    fn render(content: &HorizontalTimelineContent) -> askama::Result<String> {
        HorizontalTimelineTemplate { layout_id: Self::ID, frame: &WIDESCREEN, palette: &WARM, content }.render()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn learning_box_needs_text() {
        let content = HorizontalTimeline::resolve(Some(&json!({ "keyLearning": "Takeaway" }))).unwrap();
        assert!(content.learning().is_none());

        let data = json!({ "learningText": "Practise the message before delivery" });
        let content = HorizontalTimeline::resolve(Some(&data)).unwrap();
        assert_eq!(content.learning(), Some(("Key Learning Outcomes", "Practise the message before delivery")));
    }
}

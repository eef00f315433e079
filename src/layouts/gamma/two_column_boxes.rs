use askama::Template;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::layouts::SlideLayout;
use crate::layouts::theme::{WARM, WIDESCREEN};
use crate::templates_structs::slides::TwoColumnBoxesTemplate;

pub struct TwoColumnBoxes;

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TwoColumnBoxesContent {
    #[serde(default = "default_title")]
    #[schemars(length(min = 5, max = 60))]
    pub title: String,
    #[serde(default = "default_left_box_title")]
    #[schemars(length(min = 3, max = 40))]
    pub left_box_title: String,
    #[serde(default = "default_left_box_bullets")]
    #[schemars(length(min = 3, max = 6), inner(length(min = 5, max = 80)))]
    pub left_box_bullets: Vec<String>,
    #[serde(default = "default_right_box_title")]
    #[schemars(length(min = 3, max = 40))]
    pub right_box_title: String,
    #[serde(default = "default_right_box_bullets")]
    #[schemars(length(min = 3, max = 6), inner(length(min = 5, max = 80)))]
    pub right_box_bullets: Vec<String>,
    #[serde(default = "default_footer_description", skip_serializing_if = "Option::is_none")]
    #[schemars(length(min = 20, max = 180), description = "Optional summary below the boxes")]
    pub footer_description: Option<String>,
}

impl TwoColumnBoxesContent {
    pub fn boxes(&self) -> [(&str, &[String]); 2] {
        [
            (self.left_box_title.as_str(), self.left_box_bullets.as_slice()),
            (self.right_box_title.as_str(), self.right_box_bullets.as_slice()),
        ]
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn default_title() -> String {
    "Training Objectives & Duration".into()
}

fn default_left_box_title() -> String {
    "Primary Goals".into()
}

fn default_left_box_bullets() -> Vec<String> {
    strings(&[
        "Enhance cross-departmental collaboration",
        "Develop effective communication skills",
        "Foster adaptability and problem-solving",
        "Strengthen attention to detail",
        "Cultivate collaborative mindset",
    ])
}

fn default_right_box_title() -> String {
    "Training Details".into()
}

fn default_right_box_bullets() -> Vec<String> {
    strings(&[
        "Duration: Full-day programme (8 hours)",
        "Format: Interactive workshops",
        "Participants: Cross-functional teams",
        "Materials: Digital resources",
        "Assessment: Knowledge quiz",
    ])
}

fn default_footer_description() -> Option<String> {
    Some("This training equips professionals with essential skills for effective cross-departmental collaboration and compliance management.".into())
}

impl SlideLayout for TwoColumnBoxes {
    const ID: &'static str = "gamma-two-column-boxes";
    const NAME: &'static str = "Two Column Boxes";
    const DESCRIPTION: &'static str = "A slide layout featuring two side-by-side content boxes with headings and bullet points. Use this for training objectives and duration, comparing two concepts, or presenting goals and details.";

    type Content = TwoColumnBoxesContent;

    fn render(content: &TwoColumnBoxesContent) -> askama::Result<String> {
        TwoColumnBoxesTemplate { layout_id: Self::ID, frame: &WIDESCREEN, palette: &WARM, content }.render()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn footer_is_filled_in_by_default() {
        let content = TwoColumnBoxes::resolve(None).unwrap();
        assert!(content.footer_description.is_some());
        assert_eq!(content.boxes()[1].0, "Training Details");
        assert_eq!(content.boxes()[0].1.len(), 5);
    }
}

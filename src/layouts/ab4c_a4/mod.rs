//! Portrait A4 handout for a single customer excellence tip.

use askama::Template;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::layouts::SlideLayout;
use crate::layouts::theme::{A4_PORTRAIT, PARCHMENT};
use crate::schema::Overflow;
use crate::templates_structs::slides::A4OnePagerTemplate;

pub const GROUP: &str = "ab4c-a4";

pub struct A4OnePager;

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct A4OnePagerContent {
    #[serde(default = "default_section")]
    #[schemars(length(min = 2, max = 60), description = "Top-level section, e.g. 'Customer Excellence'")]
    pub section: String,
    #[serde(default = "default_category")]
    #[schemars(length(min = 2, max = 60))]
    pub category: String,
    #[serde(default = "default_sub_category")]
    #[schemars(length(min = 2, max = 60))]
    pub sub_category: String,
    #[serde(default = "default_audience")]
    #[schemars(length(min = 2, max = 220), description = "Who the tip is for")]
    pub audience: String,
    #[serde(default = "default_tip_title")]
    #[schemars(length(min = 5, max = 80))]
    pub tip_title: String,
    #[serde(default = "default_positioning_statement")]
    #[schemars(length(min = 10, max = 320), description = "One or two sentences framing the tip")]
    pub positioning_statement: String,
    #[serde(default = "default_key_question")]
    #[schemars(length(min = 5, max = 165), description = "The question the tip revolves around, in quotes")]
    pub key_question: String,
    #[serde(default = "default_modus_operandi_heading")]
    #[schemars(length(min = 3, max = 80))]
    pub modus_operandi_heading: String,
    #[serde(default = "default_modus_operandi_steps")]
    #[schemars(length(min = 2, max = 5), description = "How to apply the tip, 2-5 steps")]
    pub modus_operandi_steps: Vec<OperatingStep>,
    #[serde(default = "default_impact_heading")]
    #[schemars(length(min = 3, max = 80))]
    pub impact_heading: String,
    #[serde(default = "default_impact_highlights")]
    #[schemars(length(min = 2, max = 5), inner(length(min = 5, max = 180)), description = "Why the tip works, 2-5 short points")]
    pub impact_highlights: Vec<String>,
    #[serde(default = "default_closing_note")]
    #[schemars(length(min = 5, max = 320))]
    pub closing_note: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct OperatingStep {
    #[schemars(length(min = 3, max = 60))]
    pub title: String,
    #[schemars(length(min = 5, max = 220))]
    pub detail: String,
}

impl A4OnePagerContent {
    /// `Section / Category / Sub-category` breadcrumb shown above the title.
    pub fn breadcrumb(&self) -> String {
        format!("{} / {} / {}", self.section, self.category, self.sub_category)
    }
}

fn operating_step(title: &str, detail: &str) -> OperatingStep {
    OperatingStep { title: title.into(), detail: detail.into() }
}

fn default_section() -> String {
    "Customer Excellence".into()
}

fn default_category() -> String {
    "Customer Feedback Strategies".into()
}

fn default_sub_category() -> String {
    "Survey Techniques".into()
}

fn default_audience() -> String {
    "Customer experience leaders & frontline service teams".into()
}

fn default_tip_title() -> String {
    "Ask One Powerful Question".into()
}

fn default_positioning_statement() -> String {
    "Use one powerful question to gather focused, actionable customer feedback.".into()
}

fn default_key_question() -> String {
    "“What could we improve to better support you?”".into()
}

fn default_modus_operandi_heading() -> String {
    "Modus Operandi".into()
}

fn default_modus_operandi_steps() -> Vec<OperatingStep> {
    vec![
        operating_step("Frame the intent", "Explain why feedback matters and how results will drive improvements."),
        operating_step("Ask the catalytic question", "Lead with an open-ended prompt to spark reflective responses."),
        operating_step("Probe for specifics", "Follow up to understand where service excelled and what needs improvement."),
    ]
}

fn default_impact_heading() -> String {
    "Why It Works".into()
}

fn default_impact_highlights() -> Vec<String> {
    vec![
        "Centers the customer's voice rather than company assumptions.".into(),
        "Uncovers qualitative feedback highlighting process gaps.".into(),
        "Respects customer time with focused surveys.".into(),
    ]
}

fn default_closing_note() -> String {
    "Use these insights to refine your customer excellence strategy.".into()
}

impl SlideLayout for A4OnePager {
    const ID: &'static str = "ab4c-a4-one-pager";
    const NAME: &'static str = "AB4C A4 One-Pager";
    const DESCRIPTION: &'static str = "Single-slide one-pager for customer excellence tips with clear sections.";
    const OVERFLOW: Overflow = Overflow::Truncate;

    type Content = A4OnePagerContent;

    fn render(content: &A4OnePagerContent) -> askama::Result<String> {
        A4OnePagerTemplate { layout_id: Self::ID, frame: &A4_PORTRAIT, palette: &PARCHMENT, content }.render()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn long_highlights_are_cut_to_fit() {
        let data = json!({ "impactHighlights": ["Short enough point.", "y".repeat(400)] });
        let content = A4OnePager::resolve(Some(&data)).unwrap();
        assert_eq!(content.impact_highlights[0], "Short enough point.");
        assert_eq!(content.impact_highlights[1].chars().count(), 180);
        assert!(content.impact_highlights[1].ends_with("..."));
    }

    #[test]
    fn a_single_step_is_not_enough() {
        let data = json!({ "modusOperandiSteps": [{ "title": "Only one", "detail": "Nothing else to do here." }] });
        assert!(A4OnePager::resolve(Some(&data)).is_err());
    }

    #[test]
    fn breadcrumb_joins_the_three_levels() {
        let content = A4OnePager::resolve(None).unwrap();
        assert_eq!(content.breadcrumb(), "Customer Excellence / Customer Feedback Strategies / Survey Techniques");
    }
}

use askama::Template;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::layouts::SlideLayout;
use crate::layouts::theme::{WARM, WIDESCREEN};
use crate::templates_structs::slides::TwoColumnTextTemplate;

pub struct TwoColumnText;

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TwoColumnTextContent {
    #[serde(default = "default_title")]
    #[schemars(length(min = 5, max = 100), description = "Topic covering both columns")]
    pub title: String,
    #[serde(default = "default_left_heading")]
    #[schemars(length(min = 3, max = 80))]
    pub left_heading: String,
    #[serde(default = "default_left_content")]
    #[schemars(length(min = 20, max = 300), description = "Overview paragraph for the left column")]
    pub left_content: String,
    #[serde(default = "default_left_bullets")]
    #[schemars(length(min = 3, max = 8), inner(length(min = 10, max = 150)))]
    pub left_bullets: Vec<String>,
    #[serde(default = "default_right_heading")]
    #[schemars(length(min = 3, max = 80))]
    pub right_heading: String,
    #[serde(default = "default_right_content")]
    #[schemars(length(min = 20, max = 300), description = "Overview paragraph for the right column")]
    pub right_content: String,
    #[serde(default = "default_right_bullets")]
    #[schemars(length(min = 3, max = 8), inner(length(min = 10, max = 150)))]
    pub right_bullets: Vec<String>,
}

impl TwoColumnTextContent {
    /// `(heading, paragraph, bullets)` for the left then the right column.
    pub fn columns(&self) -> [(&str, &str, &[String]); 2] {
        [
            (self.left_heading.as_str(), self.left_content.as_str(), self.left_bullets.as_slice()),
            (self.right_heading.as_str(), self.right_content.as_str(), self.right_bullets.as_slice()),
        ]
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn default_title() -> String {
    "Understanding the Foundations of Trade Compliance".into()
}

fn default_left_heading() -> String {
    "Key Compliance Regulations & Frameworks".into()
}

fn default_left_content() -> String {
    "Trade compliance forms the backbone of international business operations, ensuring organisations adhere to complex regulatory frameworks that govern global commerce. Understanding these foundations is essential for all departments involved in international trade activities.".into()
}

fn default_left_bullets() -> Vec<String> {
    strings(&[
        "World Trade Organization (WTO) Agreements: Multilateral trade rules governing international commerce",
        "Customs regulations: Country-specific import/export requirements and procedures",
        "Export control laws: Restrictions on technology and goods transfers",
        "Anti-dumping measures: Protection against unfair pricing practices",
        "Economic sanctions: Trade restrictions based on foreign policy objectives",
    ])
}

fn default_right_heading() -> String {
    "Impact on Business Operations".into()
}

fn default_right_content() -> String {
    "Non-compliance can result in significant financial penalties, operational disruptions, and reputational damage. Understanding these regulations enables proactive risk management and strategic decision-making.".into()
}

fn default_right_bullets() -> Vec<String> {
    strings(&[
        "Financial penalties up to millions of pounds",
        "Shipment delays and supply chain disruptions",
        "Loss of import/export privileges",
        "Damage to business relationships and reputation",
        "Increased scrutiny from regulatory authorities",
    ])
}

impl SlideLayout for TwoColumnText {
    const ID: &'static str = "gamma-two-column-text";
    const NAME: &'static str = "Two Column Text";
    const DESCRIPTION: &'static str = "A two-column text layout with headings, descriptions, and bullet lists in each column. Use this for explaining foundational concepts, comparing regulations and impacts, or presenting dual aspects of a topic.";

    type Content = TwoColumnTextContent;

    fn render(content: &TwoColumnTextContent) -> askama::Result<String> {
        TwoColumnTextTemplate { layout_id: Self::ID, frame: &WIDESCREEN, palette: &WARM, content }.render()
    }
}

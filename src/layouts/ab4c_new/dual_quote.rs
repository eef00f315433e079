use askama::Template;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::layouts::SlideLayout;
use crate::layouts::theme::{WARM, WIDESCREEN};
use crate::templates_structs::slides::DualQuoteTemplate;

pub struct DualQuote;

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DualQuoteContent {
    #[serde(default = "default_title")]
    #[schemars(length(min = 3, max = 100), description = "Main title. Max 8 words")]
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(length(min = 10, max = 400), description = "Optional subtitle. Max 20 words")]
    pub subtitle: Option<String>,
    #[serde(default = "default_left_box")]
    #[schemars(description = "Left quote box content")]
    pub left_box: QuoteBox,
    #[serde(default = "default_right_box")]
    #[schemars(description = "Right quote box content")]
    pub right_box: QuoteBox,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct QuoteBox {
    #[schemars(length(min = 3, max = 50), description = "Box heading. Max 6 words")]
    pub heading: String,
    #[schemars(length(min = 20, max = 600), description = "Main quote or scenario. Max 30 words")]
    pub quote: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(length(min = 3, max = 40), description = "Optional key learning label. Max 6 words")]
    pub key_learning: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(length(min = 10, max = 400), description = "Optional learning description. Max 20 words")]
    pub learning_text: Option<String>,
}

impl DualQuoteContent {
    pub fn boxes(&self) -> [&QuoteBox; 2] {
        [&self.left_box, &self.right_box]
    }
}

impl QuoteBox {
    fn new(heading: &str, quote: &str, learning_text: &str) -> Self {
        Self {
            heading: heading.into(),
            quote: quote.into(),
            key_learning: Some("Key Learning:".into()),
            learning_text: Some(learning_text.into()),
        }
    }

    /// The learning strip shows when either half of it is present.
    pub fn has_learning(&self) -> bool {
        self.key_learning.is_some() || self.learning_text.is_some()
    }
}

fn default_title() -> String {
    "Comparative Analysis".into()
}

fn default_left_box() -> QuoteBox {
    QuoteBox::new(
        "Case Study 1: Supply Chain Disruption",
        "A major automotive manufacturer discovered that 30% of their suppliers were non-compliant with new environmental regulations, threatening production schedules worth £200 million.",
        "Early supplier engagement and cross-functional teamwork are essential for managing regulatory transitions affecting the supply chain.",
    )
}

fn default_right_box() -> QuoteBox {
    QuoteBox::new(
        "Case Study 2: Documentation Error",
        "A pharmaceutical exporter faced £2.3 million in penalties due to incorrect product classifications on customs declarations. The error stemmed from miscommunication between departments.",
        "Clear communication protocols and verification procedures are critical for preventing costly documentation errors in regulatory compliance.",
    )
}

impl SlideLayout for DualQuote {
    const ID: &'static str = "ab4c-new-dual-quote";
    const NAME: &'static str = "Dual Quote";
    const DESCRIPTION: &'static str = "Two side-by-side quote boxes or case studies for comparison. Perfect for before/after scenarios, comparative analysis, or parallel examples.";

    type Content = DualQuoteContent;

    fn render(content: &DualQuoteContent) -> askama::Result<String> {
        DualQuoteTemplate { layout_id: Self::ID, frame: &WIDESCREEN, palette: &WARM, content }.render()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn both_boxes_share_one_definition() {
        let schema = DualQuote::schema();
        let doc = schema.document();
        for side in ["leftBox", "rightBox"] {
            assert_eq!(doc["properties"][side]["allOf"][0]["$ref"], "#/definitions/QuoteBox", "{side}");
        }
        assert_eq!(doc["definitions"]["QuoteBox"]["properties"]["heading"]["maxLength"], 50);
        assert_eq!(doc["definitions"]["QuoteBox"]["required"], json!(["heading", "quote"]));
    }

    #[test]
    fn each_box_is_checked_on_its_own() {
        let quote = "A quote long enough to pass the minimum length.";
        let err = DualQuote::resolve(Some(&json!({ "rightBox": { "heading": "No", "quote": quote } }))).unwrap_err();
        assert!(err.to_string().contains("rightBox.heading"));

        let content = DualQuote::resolve(Some(&json!({ "leftBox": { "heading": "Left", "quote": quote } }))).unwrap();
        assert!(!content.left_box.has_learning());
        assert!(content.right_box.has_learning());
    }
}

use askama::Template;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::layouts::SlideLayout;
use crate::layouts::common::ImageRef;
use crate::layouts::theme::{WARM, WIDESCREEN};
use crate::templates_structs::slides::ThreeColumnCardsTemplate;

pub struct ThreeColumnCards;

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ThreeColumnCardsContent {
    #[serde(default = "default_title")]
    #[schemars(length(min = 5, max = 100), description = "Theme shared by the three items")]
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(length(min = 20, max = 300), description = "Optional introductory paragraph")]
    pub introduction: Option<String>,
    #[serde(default = "default_cards")]
    #[schemars(length(equal = 3), description = "Exactly three cards, each with image, title and description")]
    pub cards: Vec<Card>,
    #[serde(default = "default_footer_text", skip_serializing_if = "Option::is_none")]
    #[schemars(length(min = 20, max = 400), description = "Optional concluding remarks")]
    pub footer_text: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct Card {
    pub image: ImageRef,
    #[schemars(length(min = 3, max = 80))]
    pub title: String,
    #[schemars(length(min = 20, max = 300))]
    pub description: String,
}

fn card(url: &str, prompt: &str, title: &str, description: &str) -> Card {
    Card { image: ImageRef::new(url, prompt), title: title.into(), description: description.into() }
}

fn default_title() -> String {
    "Tools and Frameworks for Systematic Analysis".into()
}

fn default_cards() -> Vec<Card> {
    vec![
        card(
            "https://images.unsplash.com/photo-1454165804606-c3d57bc86b40?w=400&q=80",
            "Business risk assessment matrix document",
            "Risk Assessment Matrix",
            "Systematically evaluate compliance risks by plotting likelihood against potential impact. This visual tool helps prioritise resources and attention whilst ensuring comprehensive risk coverage.",
        ),
        card(
            "https://images.unsplash.com/photo-1586281380349-632531db7ed4?w=400&q=80",
            "Compliance audit checklist document",
            "Compliance Audit Checklist",
            "Structured checklists ensure comprehensive evaluation of compliance status across all relevant regulatory areas. These tools promote consistency in assessment approaches and identify gaps in current compliance programmes.",
        ),
        card(
            "https://images.unsplash.com/photo-1460925895917-afdab827c52f?w=400&q=80",
            "Regulatory monitoring systems dashboard",
            "Regulatory Monitoring Systems",
            "Technology-enabled tools that track regulatory changes and deliver real-time notifications of relevant requirements. These systems enable proactive compliance and reduce risk of overlooking important regulatory updates.",
        ),
    ]
}

fn default_footer_text() -> Option<String> {
    Some("These analytical tools support informed decision-making based on objective criteria rather than subjective judgements. Regular use of these frameworks improves compliance accuracy and builds confidence in regulatory decision-making across all departments.".into())
}

impl SlideLayout for ThreeColumnCards {
    const ID: &'static str = "gamma-three-column-cards";
    const NAME: &'static str = "Three Column Cards";
    const DESCRIPTION: &'static str = "A layout with three card-style columns, each featuring an image, title, and description. Use this for presenting tools, frameworks, features, resources, or any set of three related items.";

    type Content = ThreeColumnCardsContent;

    fn render(content: &ThreeColumnCardsContent) -> askama::Result<String> {
        ThreeColumnCardsTemplate { layout_id: Self::ID, frame: &WIDESCREEN, palette: &WARM, content }.render()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn exactly_three_cards() {
        let content = ThreeColumnCards::resolve(None).unwrap();
        let mut cards = serde_json::to_value(&content.cards).unwrap();
        assert!(ThreeColumnCards::resolve(Some(&json!({ "cards": cards.clone() }))).is_ok());
        cards.as_array_mut().unwrap().pop();
        assert!(ThreeColumnCards::resolve(Some(&json!({ "cards": cards }))).is_err());
    }

    #[test]
    fn card_with_unusable_image_still_renders() {
        let card = json!({ "image": { "__image_url__": "javascript:alert(1)" }, "title": "Checklist", "description": "A card whose image was discarded." });
        let content = ThreeColumnCards::resolve(Some(&json!({ "cards": [card.clone(), card.clone(), card] }))).unwrap();
        assert!(content.cards.iter().all(|c| !c.image.is_present()));
        let html = ThreeColumnCards::render(&content).unwrap();
        assert!(!html.contains("javascript:"));
    }
}

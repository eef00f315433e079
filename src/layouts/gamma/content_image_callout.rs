use askama::Template;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::layouts::SlideLayout;
use crate::layouts::common::ImageRef;
use crate::layouts::theme::{WARM, WIDESCREEN};
use crate::templates_structs::slides::ContentImageCalloutTemplate;

pub struct ContentImageCallout;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum CalloutKind {
    #[default]
    Tip,
    Warning,
    Info,
}

impl CalloutKind {
    pub fn label(self) -> &'static str {
        match self {
            CalloutKind::Tip => "Pro Tip:",
            CalloutKind::Warning => "Warning:",
            CalloutKind::Info => "Info:",
        }
    }

    pub fn background(self) -> &'static str {
        match self {
            CalloutKind::Tip => "#d4e9f7",
            CalloutKind::Warning => "#fef3c7",
            CalloutKind::Info => "#e0e7ff",
        }
    }

    pub fn border(self) -> &'static str {
        match self {
            CalloutKind::Tip => "#3b82f6",
            CalloutKind::Warning => "#f59e0b",
            CalloutKind::Info => "#6366f1",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ContentImageCalloutContent {
    #[serde(default = "default_title")]
    #[schemars(length(min = 5, max = 100), description = "Technical topic or regulation being explained")]
    pub title: String,
    #[serde(default = "default_description")]
    #[schemars(length(min = 20, max = 400))]
    pub description: String,
    #[serde(default = "default_sections")]
    #[schemars(length(min = 1, max = 3), description = "1-3 sections, each a heading with 2-6 bullets")]
    pub sections: Vec<ContentSection>,
    #[serde(default = "default_image")]
    pub image: ImageRef,
    #[serde(default)]
    #[schemars(description = "'tip' for advice, 'warning' for cautions, 'info' for notes")]
    pub callout_type: CalloutKind,
    #[serde(default = "default_callout_text")]
    #[schemars(length(min = 20, max = 250))]
    pub callout_text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct ContentSection {
    #[schemars(length(min = 3, max = 80))]
    pub heading: String,
    #[schemars(length(min = 2, max = 6), inner(length(min = 10, max = 200)))]
    pub bullets: Vec<String>,
}

fn section(heading: &str, bullets: &[&str]) -> ContentSection {
    ContentSection { heading: heading.into(), bullets: bullets.iter().map(|b| b.to_string()).collect() }
}

fn default_title() -> String {
    "Harmonized Tariff Schedule (HTS)".into()
}

fn default_description() -> String {
    "The Harmonized Tariff Schedule of the United States (HTSUS) is a comprehensive classification system that assigns specific codes to imported goods for duty assessment and statistical purposes. Proper classification is fundamental to import compliance and directly impacts duty rates, trade agreements benefits, and regulatory requirements.".into()
}

fn default_sections() -> Vec<ContentSection> {
    vec![
        section(
            "Classification Structure",
            &[
                "Chapters 1-97: Organized by material composition and product function",
                "6-digit base: International harmonized system codes",
                "8-10 digit extensions: US-specific statistical and legal provisions",
                "Subheadings: Detailed product descriptions and specifications",
            ],
        ),
        section(
            "Classification Best Practices",
            &[
                "Review General Rules of Interpretation (GRI) for guidance",
                "Consider product's essential character and primary function",
                "Consult CBP rulings database for precedent classifications",
                "Obtain binding ruling for complex or high-volume products",
            ],
        ),
    ]
}

fn default_image() -> ImageRef {
    ImageRef::new(
        "https://images.unsplash.com/photo-1507842217343-583bb7270b66?w=600&q=80",
        "Stack of legal books and documents on desk representing tariff schedules",
    )
}

// The label comes from the callout kind, so the text carries no prefix.
fn default_callout_text() -> String {
    "Misclassification is one of the most common compliance violations. When in doubt, seek professional assistance or request a binding ruling from CBP to ensure accuracy.".into()
}

impl SlideLayout for ContentImageCallout {
    const ID: &'static str = "gamma-content-image-callout";
    const NAME: &'static str = "Content with Image and Callout";
    const DESCRIPTION: &'static str = "A content layout with sections, supporting image, and highlighted callout box for tips, warnings, or important notes. Use this for technical topics, detailed regulations, or compliance requirements.";

    type Content = ContentImageCalloutContent;

    fn render(content: &ContentImageCalloutContent) -> askama::Result<String> {
        ContentImageCalloutTemplate { layout_id: Self::ID, frame: &WIDESCREEN, palette: &WARM, content }.render()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn callout_kind_picks_label_and_colours() {
        let content = ContentImageCallout::resolve(Some(&json!({ "calloutType": "warning" }))).unwrap();
        let html = ContentImageCallout::render(&content).unwrap();
        assert!(html.contains("Warning:"));
        assert!(html.contains(CalloutKind::Warning.border()));
        assert!(!html.contains("Pro Tip:"));
    }

    #[test]
    fn section_needs_two_bullets() {
        let data = json!({ "sections": [{ "heading": "Lonely", "bullets": ["Only one bullet here"] }] });
        assert!(ContentImageCallout::resolve(Some(&data)).is_err());
    }
}

use askama::Template;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::layouts::SlideLayout;
use crate::layouts::common::ImageRef;
use crate::layouts::theme::{WARM, WIDESCREEN};
use crate::templates_structs::slides::DiagramWithContentTemplate;

pub struct DiagramWithContent;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum DiagramStyle {
    #[default]
    Pyramid,
    Steps,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DiagramWithContentContent {
    #[serde(default = "default_title")]
    #[schemars(length(min = 5, max = 100))]
    pub title: String,
    #[serde(default = "default_description", skip_serializing_if = "Option::is_none")]
    #[schemars(length(min = 30, max = 300), description = "Optional overview of the framework")]
    pub description: Option<String>,
    #[serde(default)]
    #[schemars(description = "'pyramid' for hierarchical levels, 'steps' for sequential processes")]
    pub diagram_type: DiagramStyle,
    #[serde(default = "default_diagram_items")]
    #[schemars(length(min = 3, max = 6), description = "Pyramid levels or steps")]
    pub diagram_items: Vec<DiagramItem>,
    #[serde(default = "default_sections_heading")]
    #[schemars(length(min = 3, max = 80))]
    pub sections_heading: String,
    #[serde(default = "default_sections")]
    #[schemars(length(min = 3, max = 5))]
    pub sections: Vec<LabelledNote>,
    #[serde(default = "default_image", skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageRef>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct DiagramItem {
    #[schemars(range(min = 1, max = 10))]
    pub number: u8,
    #[schemars(length(min = 3, max = 80))]
    pub label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct LabelledNote {
    #[schemars(length(min = 3, max = 80))]
    pub label: String,
    #[schemars(length(min = 10, max = 150))]
    pub description: String,
}

impl DiagramWithContentContent {
    pub fn is_pyramid(&self) -> bool {
        self.diagram_type == DiagramStyle::Pyramid
    }
}

fn item(number: u8, label: &str) -> DiagramItem {
    DiagramItem { number, label: label.into() }
}

fn note(label: &str, description: &str) -> LabelledNote {
    LabelledNote { label: label.into(), description: description.into() }
}

fn default_title() -> String {
    "Risk Management Framework".into()
}

fn default_description() -> Option<String> {
    Some("Effective import compliance requires a systematic approach to risk management that addresses potential issues at multiple organizational levels.".into())
}

fn default_diagram_items() -> Vec<DiagramItem> {
    vec![
        item(1, "Strategic Risk Assessment"),
        item(2, "Operational Controls"),
        item(3, "Process Documentation"),
        item(4, "Daily Compliance Activities"),
    ]
}

fn default_sections_heading() -> String {
    "Risk Identification Areas".into()
}

fn default_sections() -> Vec<LabelledNote> {
    vec![
        note("Classification Accuracy:", "Product coding and tariff schedule compliance"),
        note("Valuation Integrity:", "Complete and accurate transaction reporting"),
        note("Origin Determination:", "Country of origin marking and preferential programs"),
        note("Documentation Management:", "Complete and timely filing requirements"),
        note("Regulatory Compliance:", "Agency-specific product requirements"),
    ]
}

fn default_image() -> Option<ImageRef> {
    Some(ImageRef::new(
        "https://images.unsplash.com/photo-1450101499163-c8848c66ca85?w=600&q=80",
        "Import risk assessment document on desk",
    ))
}

impl SlideLayout for DiagramWithContent {
    const ID: &'static str = "gamma-diagram-with-content";
    const NAME: &'static str = "Diagram with Content";
    const DESCRIPTION: &'static str = "A visual layout featuring diagrams (pyramid or step-based) with supporting content sections. Use this for risk management frameworks, hierarchical structures, or layered concepts.";

    type Content = DiagramWithContentContent;

    fn render(content: &DiagramWithContentContent) -> askama::Result<String> {
        DiagramWithContentTemplate { layout_id: Self::ID, frame: &WIDESCREEN, palette: &WARM, content }.render()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn pyramid_levels_narrow_as_they_go() {
        let html = DiagramWithContent::render(&DiagramWithContent::resolve(None).unwrap()).unwrap();
        assert!(html.contains("width: 100%"));
        assert!(html.contains("width: 55%"));
        assert_eq!(html.matches("class=\"pyramid-level\"").count(), 4);
    }

    #[test]
    fn steps_style_drops_the_pyramid() {
        let content = DiagramWithContent::resolve(Some(&json!({ "diagramType": "steps" }))).unwrap();
        assert!(!content.is_pyramid());
        let html = DiagramWithContent::render(&content).unwrap();
        assert_eq!(html.matches("class=\"diagram-step\"").count(), 4);
        assert!(!html.contains("pyramid-level"));
    }
}

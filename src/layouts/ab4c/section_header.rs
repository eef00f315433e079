use askama::Template;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::layouts::SlideLayout;
use crate::layouts::common::{IconRef, ImageRef};
use crate::layouts::theme::{WARM, WIDESCREEN};
use crate::templates_structs::slides::SectionHeaderTemplate;

pub struct SectionHeader;

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SectionHeaderContent {
    #[serde(default = "default_section_title")]
    #[schemars(length(min = 3, max = 80), description = "Main section title")]
    pub section_title: String,
    #[serde(default = "default_description", skip_serializing_if = "Option::is_none")]
    #[schemars(length(min = 10, max = 300), description = "Optional section description or overview")]
    pub description: Option<String>,
    #[serde(default = "default_icon")]
    #[schemars(description = "Icon representing the section theme")]
    pub icon: IconRef,
    #[serde(default = "default_pattern", skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Optional decorative background pattern")]
    pub background_pattern: Option<ImageRef>,
}

fn default_section_title() -> String {
    "Core Concepts".into()
}

fn default_description() -> Option<String> {
    Some("Understanding the fundamental principles and frameworks that guide our approach".into())
}

fn default_icon() -> IconRef {
    IconRef::bold("bookmark", "bookmark section marker")
}

fn default_pattern() -> Option<ImageRef> {
    Some(ImageRef::new(
        "https://images.unsplash.com/photo-1557683316-973673baf926",
        "abstract gradient background pattern",
    ))
}

impl SlideLayout for SectionHeader {
    const ID: &'static str = "04-section-header-slide";
    const NAME: &'static str = "Section Header";
    const DESCRIPTION: &'static str = "Clean section divider with section number, title, and description. Use to separate major parts of your training presentation with visual clarity.";

    type Content = SectionHeaderContent;

    fn render(content: &SectionHeaderContent) -> askama::Result<String> {
        SectionHeaderTemplate { layout_id: Self::ID, frame: &WIDESCREEN, palette: &WARM, content }.render()
    }
}

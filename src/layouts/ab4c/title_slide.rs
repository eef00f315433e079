use askama::Template;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::layouts::SlideLayout;
use crate::layouts::common::ImageRef;
use crate::layouts::theme::{WARM, WIDESCREEN};
use crate::templates_structs::slides::TitleSlideTemplate;

pub struct TitleSlide;

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TitleSlideContent {
    #[serde(default = "default_title")]
    #[schemars(length(min = 5, max = 100), description = "Main training title. Max 100 characters for optimal display")]
    pub title: String,
    #[serde(default = "default_subtitle")]
    #[schemars(
        length(min = 10, max = 300),
        description = "Training subtitle or tagline describing what the training covers. Do not include date, time, or duration. Max 300 characters"
    )]
    pub subtitle: String,
    #[serde(default = "default_background", skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Background image for visual appeal")]
    pub background_image: Option<ImageRef>,
}

fn default_title() -> String {
    "Professional Training Workshop".into()
}

fn default_subtitle() -> String {
    "Empowering teams with essential skills and knowledge for success in today's dynamic business environment".into()
}

fn default_background() -> Option<ImageRef> {
    Some(ImageRef::new(
        "https://images.unsplash.com/photo-1552664730-d307ca884978",
        "Professional training workshop corporate setting",
    ))
}

impl SlideLayout for TitleSlide {
    const ID: &'static str = "01-title-slide";
    const NAME: &'static str = "Title Slide";
    const DESCRIPTION: &'static str = "Opening slide for professional training presentations with title, subtitle, presenter info, and corporate branding. Perfect for introducing any training topic with a clean, professional appearance.";

    type Content = TitleSlideContent;

    fn render(content: &TitleSlideContent) -> askama::Result<String> {
        TitleSlideTemplate { layout_id: Self::ID, frame: &WIDESCREEN, palette: &WARM, content }.render()
    }
}

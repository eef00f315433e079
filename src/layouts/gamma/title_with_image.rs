use askama::Template;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::layouts::SlideLayout;
use crate::layouts::common::ImageRef;
use crate::layouts::theme::{WARM, WIDESCREEN};
use crate::templates_structs::slides::TitleWithImageTemplate;

pub struct TitleWithImage;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ImagePosition {
    Left,
    #[default]
    Right,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TitleWithImageContent {
    #[serde(default = "default_title")]
    #[schemars(length(min = 5, max = 80), description = "Main presentation title, clear and concise")]
    pub title: String,
    #[serde(default = "default_description")]
    #[schemars(length(min = 20, max = 250), description = "Subtitle giving context for the main title")]
    pub description: String,
    #[serde(default = "default_image")]
    pub image: ImageRef,
    #[serde(default)]
    pub image_position: ImagePosition,
}

impl TitleWithImageContent {
    pub fn image_on_left(&self) -> bool {
        self.image_position == ImagePosition::Left
    }

    /// Falls back to the title when the image has no prompt.
    pub fn image_alt(&self) -> &str {
        match self.image.alt() {
            "" => &self.title,
            alt => alt,
        }
    }
}

fn default_title() -> String {
    "Cross-Department Regulatory Collaboration".into()
}

fn default_description() -> String {
    "Enhancing cross-departmental collaboration for regulatory compliance across global trade operations".into()
}

fn default_image() -> ImageRef {
    ImageRef::new(
        "https://images.unsplash.com/photo-1600880292203-757bb62b4baf?w=800&q=80",
        "Professional business team collaborating in modern office setting",
    )
}

impl SlideLayout for TitleWithImage {
    const ID: &'static str = "gamma-title-with-image";
    const NAME: &'static str = "Title with Image";
    const DESCRIPTION: &'static str = "A clean professional slide layout with large title, descriptive text, and supporting image. Use this for cover slides, section introductions, topic overviews, and opening slides.";

    type Content = TitleWithImageContent;

    fn render(content: &TitleWithImageContent) -> askama::Result<String> {
        TitleWithImageTemplate { layout_id: Self::ID, frame: &WIDESCREEN, palette: &WARM, content }.render()
    }
}

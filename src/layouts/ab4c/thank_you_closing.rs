use askama::Template;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::layouts::SlideLayout;
use crate::layouts::theme::{WARM, WIDESCREEN};
use crate::templates_structs::slides::ThankYouClosingTemplate;

pub struct ThankYouClosing;

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ThankYouClosingContent {
    #[serde(default = "default_message")]
    #[schemars(length(min = 10, max = 200), description = "Thank you message. Max 200 characters")]
    pub message: String,
    #[serde(default = "default_presenter")]
    #[schemars(description = "Presenter information")]
    pub presenter: Presenter,
    #[serde(default = "default_next_session", skip_serializing_if = "Option::is_none")]
    #[schemars(length(min = 10, max = 200), description = "Optional next session information. Max 200 characters")]
    pub next_session: Option<String>,
    // Both links end up in an href, so only http(s) is accepted.
    #[serde(default = "default_website", skip_serializing_if = "Option::is_none")]
    #[schemars(url, regex(pattern = r"^https?://"), description = "Optional company website URL")]
    pub website_url: Option<String>,
    #[serde(default = "default_feedback", skip_serializing_if = "Option::is_none")]
    #[schemars(url, regex(pattern = r"^https?://"), description = "Optional feedback survey URL")]
    pub feedback_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct Presenter {
    #[schemars(length(min = 3, max = 50), description = "Presenter name")]
    pub name: String,
    #[schemars(length(min = 5, max = 100), description = "Presenter title/position")]
    pub title: String,
    #[schemars(email, regex(pattern = r"^[^@\s]+@[^@\s]+\.[^@\s]+$"), description = "Presenter email")]
    pub email: String,
}

fn default_message() -> String {
    "Thank you for your participation and commitment to excellence in compliance.".into()
}

fn default_presenter() -> Presenter {
    Presenter {
        name: "John Smith".into(),
        title: "Senior Compliance Training Manager".into(),
        email: "john.smith@ab4c.com".into(),
    }
}

fn default_next_session() -> Option<String> {
    Some("Next Training: Q2 2025 - Advanced Risk Management Strategies".into())
}

fn default_website() -> Option<String> {
    Some("https://www.ab4c.com".into())
}

fn default_feedback() -> Option<String> {
    Some("https://feedback.ab4c.com/training".into())
}

impl SlideLayout for ThankYouClosing {
    const ID: &'static str = "16-thank-you-closing";
    const NAME: &'static str = "Thank You & Closing";
    const DESCRIPTION: &'static str = "Final slide with closing message and call-to-action. Use as the last slide of the presentation.";
    const IS_TERMINAL: bool = true;

    type Content = ThankYouClosingContent;

    fn render(content: &ThankYouClosingContent) -> askama::Result<String> {
        ThankYouClosingTemplate { layout_id: Self::ID, frame: &WIDESCREEN, palette: &WARM, content }.render()
    }
}

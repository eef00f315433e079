use askama::Template;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::layouts::SlideLayout;
use crate::layouts::common::IconRef;
use crate::layouts::theme::{BRIGHT, WIDESCREEN};
use crate::templates_structs::slides::AgendaTimelineTemplate;

pub struct AgendaTimeline;

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AgendaTimelineContent {
    #[serde(default = "default_title")]
    #[schemars(length(min = 3, max = 50), description = "Agenda title. Default is 'Training Agenda'")]
    pub title: String,
    #[serde(default = "default_total_duration")]
    #[schemars(length(min = 5, max = 30), description = "Total training duration")]
    pub total_duration: String,
    #[serde(default = "default_sections")]
    #[schemars(length(min = 3, max = 8), description = "List of agenda sections with durations and descriptions")]
    pub sections: Vec<AgendaSection>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AgendaSection {
    #[schemars(length(min = 3, max = 80))]
    pub title: String,
    #[schemars(length(min = 3, max = 20))]
    pub duration: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(length(min = 10, max = 150))]
    pub description: Option<String>,
    #[serde(default = "default_section_icon")]
    pub icon: IconRef,
    #[serde(default)]
    pub is_break: bool,
}

impl AgendaSection {
    fn new(title: &str, duration: &str, description: &str, icon: IconRef, is_break: bool) -> Self {
        Self {
            title: title.into(),
            duration: duration.into(),
            description: Some(description.into()),
            icon,
            is_break,
        }
    }
}

fn default_title() -> String {
    "Training Agenda".into()
}

fn default_total_duration() -> String {
    "90 minutes".into()
}

fn default_section_icon() -> IconRef {
    IconRef::bold("presentation", "presentation section")
}

fn default_sections() -> Vec<AgendaSection> {
    vec![
        AgendaSection::new("Introduction & Welcome", "10 min", "Opening remarks, introductions, and session overview", IconRef::bold("handshake", "handshake welcome"), false),
        AgendaSection::new("Core Concepts", "25 min", "Foundation principles and theoretical framework", IconRef::bold("book", "book learning concepts"), false),
        AgendaSection::new("Coffee Break", "10 min", "Networking and refreshments", IconRef::bold("coffee", "coffee break rest"), true),
        AgendaSection::new("Practical Application", "30 min", "Hands-on exercises and real-world scenarios", IconRef::bold("wrench", "tool practice application"), false),
        AgendaSection::new("Group Discussion", "20 min", "Interactive discussion and experience sharing", IconRef::bold("users", "users discussion group"), false),
        AgendaSection::new("Q&A & Closing", "15 min", "Questions, feedback, and next steps", IconRef::bold("chat", "question answer qa"), false),
    ]
}

impl SlideLayout for AgendaTimeline {
    const ID: &'static str = "03-agenda-timeline-slide";
    const NAME: &'static str = "Agenda Timeline";
    const DESCRIPTION: &'static str = "Visual timeline showing training sections, durations, and progression. Perfect for outlining the structure of any training session with clear time allocations.";

    type Content = AgendaTimelineContent;

    fn render(content: &AgendaTimelineContent) -> askama::Result<String> {
        AgendaTimelineTemplate { layout_id: Self::ID, frame: &WIDESCREEN, palette: &BRIGHT, content }.render()
    }
}

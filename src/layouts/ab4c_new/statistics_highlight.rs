use askama::Template;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::layouts::SlideLayout;
use crate::layouts::theme::{WARM, WIDESCREEN};
use crate::templates_structs::slides::StatisticsHighlightTemplate;

pub struct StatisticsHighlight;

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct StatisticsHighlightContent {
    #[serde(default = "default_title")]
    #[schemars(length(min = 3, max = 100), description = "Main title")]
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(length(min = 10, max = 600), description = "Optional subtitle or introductory paragraph providing context")]
    pub subtitle: Option<String>,
    #[serde(default = "default_statistics")]
    #[schemars(length(min = 2, max = 3), description = "Key statistics. 2-3 items with numbers, labels, and descriptions")]
    pub statistics: Vec<Statistic>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(length(max = 600), description = "Optional footer paragraph summarizing key takeaways or implications")]
    pub footer_text: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct Statistic {
    #[schemars(length(min = 1, max = 30), description = "Large number or statistic (e.g., '£45M', '73%', '15min')")]
    pub number: String,
    #[schemars(length(min = 3, max = 200), description = "Stat label or heading")]
    pub label: String,
    #[schemars(length(min = 10, max = 250), description = "Detailed description explaining the statistic")]
    pub description: String,
}

fn statistic(number: &str, label: &str, description: &str) -> Statistic {
    Statistic { number: number.into(), label: label.into(), description: description.into() }
}

fn default_title() -> String {
    "The Critical Importance of Precision".into()
}

fn default_statistics() -> Vec<Statistic> {
    vec![
        statistic("£45M", "Average Annual Penalty", "Cost of compliance failures for major UK importers due to documentation errors and procedural oversights"),
        statistic("73%", "Human Error Factor", "Percentage of compliance incidents attributed to attention-to-detail failures rather than system inadequacies"),
        statistic("15min", "Review Time Investment", "Average additional time required for thorough document review that prevents costly compliance errors"),
    ]
}

impl SlideLayout for StatisticsHighlight {
    const ID: &'static str = "ab4c-new-statistics-highlight";
    const NAME: &'static str = "Statistics Highlight";
    const DESCRIPTION: &'static str = "Large impactful statistics or numbers with descriptions. Perfect for emphasizing key metrics, data points, or important figures.";

    type Content = StatisticsHighlightContent;

    fn render(content: &StatisticsHighlightContent) -> askama::Result<String> {
        StatisticsHighlightTemplate { layout_id: Self::ID, frame: &WIDESCREEN, palette: &WARM, content }.render()
    }
}

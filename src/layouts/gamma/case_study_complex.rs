use askama::Template;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::layouts::SlideLayout;
use crate::layouts::common::ImageRef;
use crate::layouts::theme::{WARM, WIDESCREEN};
use crate::templates_structs::slides::CaseStudyComplexTemplate;

pub struct CaseStudyComplex;

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CaseStudyComplexContent {
    #[serde(default = "default_title")]
    #[schemars(length(min = 5, max = 80))]
    pub title: String,
    #[serde(default = "default_scenario_heading")]
    #[schemars(length(min = 3, max = 50))]
    pub scenario_heading: String,
    #[serde(default = "default_scenario_text")]
    #[schemars(length(min = 30, max = 150))]
    pub scenario_text: String,
    #[serde(default = "default_scenario_image", skip_serializing_if = "Option::is_none")]
    pub scenario_image: Option<ImageRef>,
    #[serde(default = "default_challenges_heading")]
    #[schemars(length(min = 3, max = 50))]
    pub challenges_heading: String,
    #[serde(default = "default_challenges_bullets")]
    #[schemars(length(min = 2, max = 4), inner(length(min = 10, max = 80)))]
    pub challenges_bullets: Vec<String>,
    #[serde(default = "default_solutions_heading")]
    #[schemars(length(min = 3, max = 50))]
    pub solutions_heading: String,
    #[serde(default = "default_solutions_bullets")]
    #[schemars(length(min = 2, max = 4), inner(length(min = 10, max = 80)))]
    pub solutions_bullets: Vec<String>,
    #[serde(default = "default_results_text")]
    #[schemars(length(min = 20, max = 120), description = "Key results, shown in a highlighted box")]
    pub results_text: String,
    #[serde(default = "default_metrics")]
    #[schemars(length(min = 2, max = 4))]
    pub metrics: Vec<Metric>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct Metric {
    #[schemars(length(min = 1, max = 20), description = "e.g. '15%' or '$0'")]
    pub value: String,
    #[schemars(length(min = 3, max = 40))]
    pub label: String,
    #[schemars(length(min = 10, max = 60))]
    pub description: String,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn metric(value: &str, label: &str, description: &str) -> Metric {
    Metric { value: value.into(), label: label.into(), description: description.into() }
}

fn default_title() -> String {
    "Case Study: Electronics Import Compliance".into()
}

fn default_scenario_heading() -> String {
    "Scenario Background".into()
}

fn default_scenario_text() -> String {
    "TechCorp imports consumer electronics from Asia. The company faced compliance challenges related to classification, FCC requirements, and tariffs.".into()
}

fn default_scenario_image() -> Option<ImageRef> {
    Some(ImageRef::new(
        "https://images.unsplash.com/photo-1556656793-08538906a9f8?w=600&q=80",
        "Smartphones and electronics on desk with compliance documents",
    ))
}

fn default_challenges_heading() -> String {
    "Compliance Challenges Identified".into()
}

fn default_challenges_bullets() -> Vec<String> {
    strings(&[
        "Multiple products required precise HTS classification",
        "Electronic devices needed FCC authorization and labeling",
        "Section 301 tariffs required origin analysis",
        "Supply chain documentation gaps",
    ])
}

fn default_solutions_heading() -> String {
    "Solutions Implemented".into()
}

fn default_solutions_bullets() -> Vec<String> {
    strings(&[
        "Classification review with binding ruling requests",
        "FCC compliance program with authorization tracking",
        "Supply chain diversification to minimize tariffs",
        "Enhanced documentation for origin determination",
    ])
}

fn default_results_text() -> String {
    "TechCorp achieved 15% duty savings, reduced examinations by 50%, and avoided penalties.".into()
}

fn default_metrics() -> Vec<Metric> {
    vec![
        metric("15%", "Duty Savings", "Savings through proper classification"),
        metric("50%", "Examination Reduction", "Reduced customs examinations"),
        metric("$0", "Penalties Avoided", "Zero penalties through compliance"),
    ]
}

impl SlideLayout for CaseStudyComplex {
    const ID: &'static str = "gamma-case-study-complex";
    const NAME: &'static str = "Case Study (Complex)";
    const DESCRIPTION: &'static str = "A case study layout with scenario background, challenges, solutions, highlighted results, and quantitative metrics. Use this for detailed case studies with measurable outcomes.";

    type Content = CaseStudyComplexContent;

    fn render(content: &CaseStudyComplexContent) -> askama::Result<String> {
        CaseStudyComplexTemplate { layout_id: Self::ID, frame: &WIDESCREEN, palette: &WARM, content }.render()
    }
}

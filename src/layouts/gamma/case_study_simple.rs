use askama::Template;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::layouts::SlideLayout;
use crate::layouts::theme::{WARM, WIDESCREEN};
use crate::templates_structs::slides::CaseStudySimpleTemplate;

pub struct CaseStudySimple;

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CaseStudySimpleContent {
    #[serde(default = "default_title")]
    #[schemars(length(min = 5, max = 80), description = "Usually 'Case Study' followed by the topic")]
    pub title: String,
    #[serde(default = "default_subtitle")]
    #[schemars(length(min = 5, max = 120))]
    pub subtitle: String,
    #[serde(default = "default_scenario")]
    #[schemars(length(min = 30, max = 500), description = "Opening scenario that sets up the case")]
    pub scenario: String,
    #[serde(default = "default_challenge_heading")]
    #[schemars(length(min = 3, max = 50))]
    pub challenge_heading: String,
    #[serde(default = "default_challenge_content")]
    #[schemars(length(min = 20, max = 400))]
    pub challenge_content: String,
    #[serde(default = "default_analysis_heading")]
    #[schemars(length(min = 3, max = 50))]
    pub analysis_heading: String,
    #[serde(default = "default_analysis_bullets")]
    #[schemars(length(min = 3, max = 6), inner(length(min = 10, max = 200)))]
    pub analysis_bullets: Vec<String>,
    #[serde(default = "default_resolution_heading")]
    #[schemars(length(min = 3, max = 50))]
    pub resolution_heading: String,
    #[serde(default = "default_resolution_bullets")]
    #[schemars(length(min = 3, max = 6), inner(length(min = 10, max = 200)))]
    pub resolution_bullets: Vec<String>,
    #[serde(default = "default_outcome_heading")]
    #[schemars(length(min = 3, max = 50))]
    pub outcome_heading: String,
    #[serde(default = "default_outcome")]
    #[schemars(length(min = 30, max = 500))]
    pub outcome: String,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn default_title() -> String {
    "Case Study".into()
}

fn default_subtitle() -> String {
    "Identifying and Resolving Compliance Ambiguities".into()
}

fn default_scenario() -> String {
    "A UK-based electronics manufacturer received conflicting guidance from different regulatory bodies regarding the classification of a new product containing dual-use technology. The ambiguity threatened to delay a major export contract worth £2.5 million.".into()
}

fn default_challenge_heading() -> String {
    "The Challenge".into()
}

fn default_challenge_content() -> String {
    "Multiple regulatory frameworks appeared to apply to the product, each with different requirements and timelines. The compliance team needed to resolve these ambiguities quickly whilst ensuring full regulatory adherence.".into()
}

fn default_analysis_heading() -> String {
    "Initial Analysis".into()
}

fn default_analysis_bullets() -> Vec<String> {
    strings(&[
        "Export control regulations suggested dual-use classification",
        "Customs authorities indicated standard commercial classification",
        "Industry trade association provided third interpretation",
        "Customer required definitive classification within 10 days",
        "Potential penalties ranged from warnings to export restrictions",
    ])
}

fn default_resolution_heading() -> String {
    "Resolution Process".into()
}

fn default_resolution_bullets() -> Vec<String> {
    strings(&[
        "Assembled cross-functional team including legal, technical, and commercial expertise",
        "Conducted systematic analysis of all applicable regulations",
        "Sought formal clarification from primary regulatory authority",
        "Developed conservative compliance approach pending clarification",
        "Implemented enhanced documentation and monitoring procedures",
    ])
}

fn default_outcome_heading() -> String {
    "Outcome:".into()
}

fn default_outcome() -> String {
    "The structured analytical approach enabled successful resolution within the customer timeline, avoided regulatory violations, and established protocols for similar future situations. The experience highlighted the importance of cross-departmental collaboration in resolving complex compliance challenges.".into()
}

impl SlideLayout for CaseStudySimple {
    const ID: &'static str = "gamma-case-study-simple";
    const NAME: &'static str = "Case Study (Simple)";
    const DESCRIPTION: &'static str = "A structured case study layout with scenario quote, challenge, analysis, resolution, and outcome sections. Use this for real-world examples, compliance scenarios, or problem-solving stories.";

    type Content = CaseStudySimpleContent;

    fn render(content: &CaseStudySimpleContent) -> askama::Result<String> {
        CaseStudySimpleTemplate { layout_id: Self::ID, frame: &WIDESCREEN, palette: &WARM, content }.render()
    }
}

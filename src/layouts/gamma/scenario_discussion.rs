use askama::Template;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::layouts::SlideLayout;
use crate::layouts::theme::{WARM, WIDESCREEN};
use crate::templates_structs::slides::ScenarioDiscussionTemplate;

pub struct ScenarioDiscussion;

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ScenarioDiscussionContent {
    #[serde(default = "default_title")]
    #[schemars(length(min = 5, max = 80), description = "Activity title, e.g. 'Group Discussion' or 'Workshop'")]
    pub title: String,
    #[serde(default = "default_subtitle")]
    #[schemars(length(min = 5, max = 120))]
    pub subtitle: String,
    #[serde(default = "default_scenario")]
    #[schemars(length(min = 30, max = 250), description = "Dilemma presented as a quote")]
    pub scenario: String,
    #[serde(default = "default_framework_description")]
    #[schemars(length(min = 30, max = 180))]
    pub framework_description: String,
    #[serde(default = "default_steps")]
    #[schemars(length(equal = 4), description = "Exactly four numbered steps, shown as a 2x2 grid")]
    pub steps: Vec<DiscussionStep>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct DiscussionStep {
    #[schemars(range(min = 1, max = 4))]
    pub number: u8,
    #[schemars(length(min = 3, max = 60))]
    pub heading: String,
    #[schemars(length(min = 20, max = 100))]
    pub description: String,
}

fn step(number: u8, heading: &str, description: &str) -> DiscussionStep {
    DiscussionStep { number, heading: heading.into(), description: description.into() }
}

fn default_title() -> String {
    "Group Discussion".into()
}

fn default_subtitle() -> String {
    "Navigating Ethical Dilemmas in Compliance".into()
}

fn default_scenario() -> String {
    "\"A key customer requests expedited shipment that requires bypassing compliance procedures. The order represents 15% of quarterly revenue but would delay shipment by three days.\"".into()
}

fn default_framework_description() -> String {
    "This session explores ethical dilemmas in trade compliance, encouraging participants to share experiences and develop collaborative approaches.".into()
}

fn default_steps() -> Vec<DiscussionStep> {
    vec![
        step(1, "Scenario Presentation", "Facilitator presents realistic compliance dilemma requiring ethical judgement."),
        step(2, "Individual Reflection", "Participants consider responses and identify key ethical principles."),
        step(3, "Small Group Discussion", "Groups explore perspectives and develop potential solutions."),
        step(4, "Collective Debrief", "Groups share insights and build shared understanding."),
    ]
}

impl SlideLayout for ScenarioDiscussion {
    const ID: &'static str = "gamma-scenario-discussion";
    const NAME: &'static str = "Scenario Discussion Framework";
    const DESCRIPTION: &'static str = "A structured discussion layout with scenario quote, framework description, and numbered step grid. Use this for group discussions, scenario-based exercises, or workshop activities.";

    type Content = ScenarioDiscussionContent;

    fn render(content: &ScenarioDiscussionContent) -> askama::Result<String> {
        ScenarioDiscussionTemplate { layout_id: Self::ID, frame: &WIDESCREEN, palette: &WARM, content }.render()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn step_numbers_stay_within_the_grid() {
        let mut steps = serde_json::to_value(default_steps()).unwrap();
        steps[3]["number"] = json!(5);
        let err = ScenarioDiscussion::resolve(Some(&json!({ "steps": steps }))).unwrap_err();
        assert!(err.to_string().contains("steps.3.number"));
    }
}

use askama::Template;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::layouts::SlideLayout;
use crate::layouts::theme::{WARM, WIDESCREEN};
use crate::templates_structs::slides::ExerciseActivityTemplate;

pub struct ExerciseActivity;

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ExerciseActivityContent {
    #[serde(default = "default_title")]
    #[schemars(length(min = 5, max = 80), description = "Usually 'Exercise', 'Activity' or 'Workshop'")]
    pub title: String,
    #[serde(default = "default_subtitle")]
    #[schemars(length(min = 5, max = 120))]
    pub subtitle: String,
    #[serde(default = "default_description")]
    #[schemars(length(min = 30, max = 500))]
    pub description: String,
    #[serde(default)]
    #[schemars(description = "Duration, team composition and materials")]
    pub exercise_structure: ExerciseStructure,
    #[serde(default = "default_learning_objectives")]
    #[schemars(length(min = 30, max = 400))]
    pub learning_objectives: String,
    #[serde(default = "default_activity_steps")]
    #[schemars(length(min = 4, max = 8), inner(length(min = 10, max = 250)))]
    pub activity_steps: Vec<String>,
}

/// Each part defaults on its own, so `{"teams": ".."}` keeps the other two.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct ExerciseStructure {
    #[serde(default = "default_duration")]
    #[schemars(length(min = 5, max = 100))]
    pub duration: String,
    #[serde(default = "default_teams")]
    #[schemars(length(min = 5, max = 100))]
    pub teams: String,
    #[serde(default = "default_materials")]
    #[schemars(length(min = 5, max = 150))]
    pub materials: String,
}

impl Default for ExerciseStructure {
    fn default() -> Self {
        Self { duration: default_duration(), teams: default_teams(), materials: default_materials() }
    }
}

fn default_title() -> String {
    "Practical Exercise".into()
}

fn default_subtitle() -> String {
    "Translating Complex Regulations".into()
}

fn default_description() -> String {
    "This interactive exercise challenges participants to transform complex regulatory language into clear, actionable procedures that can be implemented across departments. Working in cross-functional teams, participants will practice the essential skills needed for effective compliance communication.".into()
}

fn default_duration() -> String {
    "45 minutes including debrief".into()
}

fn default_teams() -> String {
    "Mixed departmental groups of 4-5 participants".into()
}

fn default_materials() -> String {
    "Sample regulatory texts, templates, and reference materials".into()
}

fn default_learning_objectives() -> String {
    "Participants will develop practical skills in regulatory interpretation, cross-departmental communication, and procedure development whilst building collaborative relationships with colleagues from other departments.".into()
}

fn default_activity_steps() -> Vec<String> {
    [
        "Teams receive authentic regulatory excerpts from current trade compliance requirements",
        "Each team identifies key obligations, timelines, and responsible parties within the regulation",
        "Teams translate the regulatory language into plain English procedures suitable for their respective departments",
        "Groups create implementation checklists and communication protocols",
        "Teams present their interpretations and receive feedback from other participants",
        "Facilitator leads discussion on best practices and common interpretation challenges",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

impl SlideLayout for ExerciseActivity {
    const ID: &'static str = "gamma-exercise-activity";
    const NAME: &'static str = "Exercise Activity";
    const DESCRIPTION: &'static str = "An exercise layout with description, structure details, learning objectives, and numbered activity steps. Use this for practical exercises, workshop activities, or hands-on learning.";

    type Content = ExerciseActivityContent;

    fn render(content: &ExerciseActivityContent) -> askama::Result<String> {
        ExerciseActivityTemplate { layout_id: Self::ID, frame: &WIDESCREEN, palette: &WARM, content }.render()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn partial_structure_keeps_other_parts() {
        let data = json!({ "exerciseStructure": { "teams": "Pairs from the same desk" } });
        let content = ExerciseActivity::resolve(Some(&data)).unwrap();
        assert_eq!(content.exercise_structure.teams, "Pairs from the same desk");
        assert_eq!(content.exercise_structure.duration, "45 minutes including debrief");
        assert_eq!(content.exercise_structure.materials, default_materials());
    }
}

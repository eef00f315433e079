use askama::Template;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::layouts::SlideLayout;
use crate::layouts::theme::{BRIGHT, WIDESCREEN};
use crate::templates_structs::slides::QuizAssessmentTemplate;

pub struct QuizAssessment;

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct QuizAssessmentContent {
    #[serde(default = "default_question_number")]
    #[schemars(range(min = 1), description = "Question number in sequence")]
    pub question_number: u32,
    #[serde(default = "default_question")]
    #[schemars(length(min = 10, max = 300), description = "The quiz question. Max 300 characters for optimal display")]
    pub question: String,
    #[serde(default = "default_options")]
    #[schemars(length(equal = 4), description = "Exactly 4 answer options with letters A-D")]
    pub options: Vec<QuizOption>,
    #[serde(default = "default_explanation", skip_serializing_if = "Option::is_none")]
    #[schemars(length(min = 20, max = 500), description = "Optional explanation for the correct answer. Max 500 characters")]
    pub explanation: Option<String>,
    #[serde(default)]
    #[schemars(description = "Whether to reveal the correct answer")]
    pub show_answer: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct QuizOption {
    #[schemars(regex(pattern = r"^[A-D]$"), description = "Option letter identifier")]
    pub letter: String,
    #[schemars(length(min = 5, max = 150), description = "Option text. Max 150 characters")]
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Whether this is the correct answer")]
    pub is_correct: Option<bool>,
}

impl QuizOption {
    fn new(letter: &str, text: &str, is_correct: bool) -> Self {
        Self { letter: letter.into(), text: text.into(), is_correct: Some(is_correct) }
    }

    pub fn is_correct(&self) -> bool {
        self.is_correct.unwrap_or(false)
    }
}

impl QuizAssessmentContent {
    /// The explanation is only shown once the answer is revealed.
    pub fn revealed_explanation(&self) -> Option<&str> {
        self.explanation.as_deref().filter(|_| self.show_answer)
    }
}

fn default_question_number() -> u32 {
    1
}

fn default_question() -> String {
    "Which of the following best describes our compliance policy?".into()
}

fn default_options() -> Vec<QuizOption> {
    vec![
        QuizOption::new("A", "Report immediately to your supervisor", false),
        QuizOption::new("B", "Document the issue and escalate through proper channels", true),
        QuizOption::new("C", "Wait for the monthly review meeting", false),
        QuizOption::new("D", "Handle it independently without reporting", false),
    ]
}

fn default_explanation() -> Option<String> {
    Some("The correct answer is B. Following proper documentation and escalation procedures ensures compliance and creates an audit trail.".into())
}

impl SlideLayout for QuizAssessment {
    const ID: &'static str = "09-quiz-assessment";
    const NAME: &'static str = "Quiz Assessment";
    const DESCRIPTION: &'static str = "Multiple-choice knowledge check with four lettered options and an optional explanation. Use to test understanding after a training section.";

    type Content = QuizAssessmentContent;

    fn render(content: &QuizAssessmentContent) -> askama::Result<String> {
        QuizAssessmentTemplate { layout_id: Self::ID, frame: &WIDESCREEN, palette: &BRIGHT, content }.render()
    }
}

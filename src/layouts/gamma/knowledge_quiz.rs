use askama::Template;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::layouts::SlideLayout;
use crate::layouts::theme::{WARM, WIDESCREEN};
use crate::templates_structs::slides::KnowledgeQuizTemplate;

/// Four multiple-choice questions in a 2x2 grid. Answers are not revealed.
pub struct KnowledgeQuiz;

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct KnowledgeQuizContent {
    #[serde(default = "default_title")]
    #[schemars(length(min = 5, max = 80), description = "Usually includes 'Quiz', 'Assessment' or 'Knowledge Check'")]
    pub title: String,
    #[serde(default = "default_instructions")]
    #[schemars(length(min = 10, max = 120))]
    pub instructions: String,
    #[serde(default = "default_questions")]
    #[schemars(length(equal = 4), description = "Exactly four questions, each with four options and a 0-3 answer index")]
    pub questions: Vec<QuizQuestion>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct QuizQuestion {
    #[schemars(length(min = 10, max = 80))]
    pub question: String,
    #[schemars(length(equal = 4), inner(length(min = 2, max = 60)))]
    pub options: Vec<String>,
    #[schemars(range(min = 0, max = 3))]
    pub correct_answer: u8,
}

impl QuizQuestion {
    /// Options paired with their letters, `A` to `D`.
    pub fn lettered_options(&self) -> Vec<(char, &str)> {
        ('A'..='D').zip(self.options.iter().map(String::as_str)).collect()
    }
}

fn question(text: &str, options: [&str; 4], correct_answer: u8) -> QuizQuestion {
    QuizQuestion {
        question: text.into(),
        options: options.iter().map(|o| o.to_string()).collect(),
        correct_answer,
    }
}

fn default_title() -> String {
    "Knowledge Assessment Quiz".into()
}

fn default_instructions() -> String {
    "Test your understanding with these multiple-choice questions:".into()
}

fn default_questions() -> Vec<QuizQuestion> {
    vec![
        question(
            "What is the primary method for customs valuation?",
            ["Fair market value", "Transaction value", "Replacement cost", "Book value"],
            1,
        ),
        question("How many digits are in a complete HTS code?", ["6 digits", "8 digits", "10 digits", "12 digits"], 2),
        question(
            "What does C-TPAT stand for?",
            [
                "Commercial Trade Partnership",
                "Customs-Trade Partnership Against Terrorism",
                "Container Transport Protection",
                "Certified Trade Protection Tool",
            ],
            1,
        ),
        question(
            "Which document proves country of origin?",
            ["Commercial invoice", "Bill of lading", "Certificate of origin", "Packing list"],
            2,
        ),
    ]
}

impl SlideLayout for KnowledgeQuiz {
    const ID: &'static str = "gamma-quiz-assessment";
    const NAME: &'static str = "Quiz Assessment";
    const DESCRIPTION: &'static str = "A quiz layout with four multiple choice questions. Use this for knowledge checks, assessments, tests, quizzes, and learning verification.";

    type Content = KnowledgeQuizContent;

    fn render(content: &KnowledgeQuizContent) -> askama::Result<String> {
        KnowledgeQuizTemplate { layout_id: Self::ID, frame: &WIDESCREEN, palette: &WARM, content }.render()
    }
}

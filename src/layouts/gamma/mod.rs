//! General-purpose training slides: image covers, columns, cards, diagrams,
//! case studies, quizzes and workshop frameworks.

mod case_study_complex;
mod case_study_simple;
mod content_image_callout;
mod diagram_with_content;
mod exercise_activity;
mod knowledge_quiz;
mod scenario_discussion;
mod three_column_cards;
mod title_with_image;
mod two_column_boxes;
mod two_column_text;

pub use case_study_complex::{CaseStudyComplex, CaseStudyComplexContent, Metric};
pub use case_study_simple::{CaseStudySimple, CaseStudySimpleContent};
pub use content_image_callout::{CalloutKind, ContentImageCallout, ContentImageCalloutContent, ContentSection};
pub use diagram_with_content::{DiagramItem, DiagramStyle, DiagramWithContent, DiagramWithContentContent, LabelledNote};
pub use exercise_activity::{ExerciseActivity, ExerciseActivityContent, ExerciseStructure};
pub use knowledge_quiz::{KnowledgeQuiz, KnowledgeQuizContent, QuizQuestion};
pub use scenario_discussion::{DiscussionStep, ScenarioDiscussion, ScenarioDiscussionContent};
pub use three_column_cards::{Card, ThreeColumnCards, ThreeColumnCardsContent};
pub use title_with_image::{ImagePosition, TitleWithImage, TitleWithImageContent};
pub use two_column_boxes::{TwoColumnBoxes, TwoColumnBoxesContent};
pub use two_column_text::{TwoColumnText, TwoColumnTextContent};

pub const GROUP: &str = "gamma";

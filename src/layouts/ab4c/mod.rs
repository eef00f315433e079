//! Professional training deck: title, agenda, sections, processes, quizzes
//! and closing slides.

mod agenda_timeline;
mod key_takeaways;
mod process_flow;
mod quiz_assessment;
mod section_header;
mod thank_you_closing;
mod title_slide;

pub use agenda_timeline::{AgendaSection, AgendaTimeline, AgendaTimelineContent};
pub use key_takeaways::{KeyTakeaways, KeyTakeawaysContent, Takeaway};
pub use process_flow::{FlowDirection, ProcessFlow, ProcessFlowContent, ProcessStep};
pub use quiz_assessment::{QuizAssessment, QuizAssessmentContent, QuizOption};
pub use section_header::{SectionHeader, SectionHeaderContent};
pub use thank_you_closing::{Presenter, ThankYouClosing, ThankYouClosingContent};
pub use title_slide::{TitleSlide, TitleSlideContent};

pub const GROUP: &str = "ab4c";

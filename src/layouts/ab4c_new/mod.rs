//! Second-generation training layouts without icon dependencies.

mod circular_process;
mod dual_quote;
mod four_step_process;
mod horizontal_timeline;
mod numbered_steps;
mod statistics_highlight;

pub use circular_process::{CircularProcess, CircularProcessContent, CycleStep};
pub use dual_quote::{DualQuote, DualQuoteContent, QuoteBox};
pub use four_step_process::{FourStepProcess, FourStepProcessContent, ProcessStage};
pub use horizontal_timeline::{HorizontalTimeline, HorizontalTimelineContent, Phase};
pub use numbered_steps::{NumberedStep, NumberedSteps, NumberedStepsContent};
pub use statistics_highlight::{Statistic, StatisticsHighlight, StatisticsHighlightContent};

pub const GROUP: &str = "ab4c-new";

// Template contexts for slide fragments. Every slide template extends
// `slides/base.html`, which reads `layout_id`, `frame` and `palette`.

use askama::Template;

use crate::layouts::ab4c::{
    AgendaTimelineContent, KeyTakeawaysContent, ProcessFlowContent, QuizAssessmentContent,
    SectionHeaderContent, ThankYouClosingContent, TitleSlideContent,
};
use crate::layouts::ab4c_a4::A4OnePagerContent;
use crate::layouts::ab4c_new::{
    CircularProcessContent, DualQuoteContent, FourStepProcessContent, HorizontalTimelineContent,
    NumberedStepsContent, StatisticsHighlightContent,
};
use crate::layouts::gamma::{
    CaseStudyComplexContent, CaseStudySimpleContent, ContentImageCalloutContent, DiagramWithContentContent,
    ExerciseActivityContent, KnowledgeQuizContent, ScenarioDiscussionContent, ThreeColumnCardsContent,
    TitleWithImageContent, TwoColumnBoxesContent, TwoColumnTextContent,
};
use crate::layouts::theme::{Frame, Palette};
use crate::layouts::trade_compliance::TradeComplianceContent;

#[derive(Template)]
#[template(path = "slides/ab4c/title_slide.html")]
pub struct TitleSlideTemplate<'a> {
    pub layout_id: &'static str,
    pub frame: &'static Frame,
    pub palette: &'static Palette,
    pub content: &'a TitleSlideContent,
}

#[derive(Template)]
#[template(path = "slides/ab4c/agenda_timeline.html")]
pub struct AgendaTimelineTemplate<'a> {
    pub layout_id: &'static str,
    pub frame: &'static Frame,
    pub palette: &'static Palette,
    pub content: &'a AgendaTimelineContent,
}

#[derive(Template)]
#[template(path = "slides/ab4c/section_header.html")]
pub struct SectionHeaderTemplate<'a> {
    pub layout_id: &'static str,
    pub frame: &'static Frame,
    pub palette: &'static Palette,
    pub content: &'a SectionHeaderContent,
}

#[derive(Template)]
#[template(path = "slides/ab4c/process_flow.html")]
pub struct ProcessFlowTemplate<'a> {
    pub layout_id: &'static str,
    pub frame: &'static Frame,
    pub palette: &'static Palette,
    pub content: &'a ProcessFlowContent,
}

#[derive(Template)]
#[template(path = "slides/ab4c/quiz_assessment.html")]
pub struct QuizAssessmentTemplate<'a> {
    pub layout_id: &'static str,
    pub frame: &'static Frame,
    pub palette: &'static Palette,
    pub content: &'a QuizAssessmentContent,
}

#[derive(Template)]
#[template(path = "slides/ab4c/key_takeaways.html")]
pub struct KeyTakeawaysTemplate<'a> {
    pub layout_id: &'static str,
    pub frame: &'static Frame,
    pub palette: &'static Palette,
    pub content: &'a KeyTakeawaysContent,
}

#[derive(Template)]
#[template(path = "slides/ab4c/thank_you_closing.html")]
pub struct ThankYouClosingTemplate<'a> {
    pub layout_id: &'static str,
    pub frame: &'static Frame,
    pub palette: &'static Palette,
    pub content: &'a ThankYouClosingContent,
}

#[derive(Template)]
#[template(path = "slides/ab4c_new/statistics_highlight.html")]
pub struct StatisticsHighlightTemplate<'a> {
    pub layout_id: &'static str,
    pub frame: &'static Frame,
    pub palette: &'static Palette,
    pub content: &'a StatisticsHighlightContent,
}

#[derive(Template)]
#[template(path = "slides/ab4c_new/dual_quote.html")]
pub struct DualQuoteTemplate<'a> {
    pub layout_id: &'static str,
    pub frame: &'static Frame,
    pub palette: &'static Palette,
    pub content: &'a DualQuoteContent,
}

#[derive(Template)]
#[template(path = "slides/ab4c_new/numbered_steps.html")]
pub struct NumberedStepsTemplate<'a> {
    pub layout_id: &'static str,
    pub frame: &'static Frame,
    pub palette: &'static Palette,
    pub content: &'a NumberedStepsContent,
}

#[derive(Template)]
#[template(path = "slides/ab4c_new/four_step_process.html")]
pub struct FourStepProcessTemplate<'a> {
    pub layout_id: &'static str,
    pub frame: &'static Frame,
    pub palette: &'static Palette,
    pub content: &'a FourStepProcessContent,
}

#[derive(Template)]
#[template(path = "slides/ab4c_new/horizontal_timeline.html")]
pub struct HorizontalTimelineTemplate<'a> {
    pub layout_id: &'static str,
    pub frame: &'static Frame,
    pub palette: &'static Palette,
    pub content: &'a HorizontalTimelineContent,
}

#[derive(Template)]
#[template(path = "slides/ab4c_new/circular_process.html")]
pub struct CircularProcessTemplate<'a> {
    pub layout_id: &'static str,
    pub frame: &'static Frame,
    pub palette: &'static Palette,
    pub content: &'a CircularProcessContent,
}

#[derive(Template)]
#[template(path = "slides/ab4c_a4/one_pager.html")]
pub struct A4OnePagerTemplate<'a> {
    pub layout_id: &'static str,
    pub frame: &'static Frame,
    pub palette: &'static Palette,
    pub content: &'a A4OnePagerContent,
}

#[derive(Template)]
#[template(path = "slides/gamma/title_with_image.html")]
pub struct TitleWithImageTemplate<'a> {
    pub layout_id: &'static str,
    pub frame: &'static Frame,
    pub palette: &'static Palette,
    pub content: &'a TitleWithImageContent,
}

#[derive(Template)]
#[template(path = "slides/gamma/two_column_text.html")]
pub struct TwoColumnTextTemplate<'a> {
    pub layout_id: &'static str,
    pub frame: &'static Frame,
    pub palette: &'static Palette,
    pub content: &'a TwoColumnTextContent,
}

#[derive(Template)]
#[template(path = "slides/gamma/two_column_boxes.html")]
pub struct TwoColumnBoxesTemplate<'a> {
    pub layout_id: &'static str,
    pub frame: &'static Frame,
    pub palette: &'static Palette,
    pub content: &'a TwoColumnBoxesContent,
}

#[derive(Template)]
#[template(path = "slides/gamma/three_column_cards.html")]
pub struct ThreeColumnCardsTemplate<'a> {
    pub layout_id: &'static str,
    pub frame: &'static Frame,
    pub palette: &'static Palette,
    pub content: &'a ThreeColumnCardsContent,
}

#[derive(Template)]
#[template(path = "slides/gamma/case_study_simple.html")]
pub struct CaseStudySimpleTemplate<'a> {
    pub layout_id: &'static str,
    pub frame: &'static Frame,
    pub palette: &'static Palette,
    pub content: &'a CaseStudySimpleContent,
}

#[derive(Template)]
#[template(path = "slides/gamma/scenario_discussion.html")]
pub struct ScenarioDiscussionTemplate<'a> {
    pub layout_id: &'static str,
    pub frame: &'static Frame,
    pub palette: &'static Palette,
    pub content: &'a ScenarioDiscussionContent,
}

#[derive(Template)]
#[template(path = "slides/gamma/content_image_callout.html")]
pub struct ContentImageCalloutTemplate<'a> {
    pub layout_id: &'static str,
    pub frame: &'static Frame,
    pub palette: &'static Palette,
    pub content: &'a ContentImageCalloutContent,
}

#[derive(Template)]
#[template(path = "slides/gamma/diagram_with_content.html")]
pub struct DiagramWithContentTemplate<'a> {
    pub layout_id: &'static str,
    pub frame: &'static Frame,
    pub palette: &'static Palette,
    pub content: &'a DiagramWithContentContent,
}

#[derive(Template)]
#[template(path = "slides/gamma/exercise_activity.html")]
pub struct ExerciseActivityTemplate<'a> {
    pub layout_id: &'static str,
    pub frame: &'static Frame,
    pub palette: &'static Palette,
    pub content: &'a ExerciseActivityContent,
}

#[derive(Template)]
#[template(path = "slides/gamma/case_study_complex.html")]
pub struct CaseStudyComplexTemplate<'a> {
    pub layout_id: &'static str,
    pub frame: &'static Frame,
    pub palette: &'static Palette,
    pub content: &'a CaseStudyComplexContent,
}

#[derive(Template)]
#[template(path = "slides/gamma/knowledge_quiz.html")]
pub struct KnowledgeQuizTemplate<'a> {
    pub layout_id: &'static str,
    pub frame: &'static Frame,
    pub palette: &'static Palette,
    pub content: &'a KnowledgeQuizContent,
}

#[derive(Template)]
#[template(path = "slides/trade_compliance/one_pager.html")]
pub struct TradeComplianceTemplate<'a> {
    pub layout_id: &'static str,
    pub frame: &'static Frame,
    pub palette: &'static Palette,
    pub content: &'a TradeComplianceContent,
}

//! Printable A4 one-pager for trade compliance best practices.
//!
//! Content here is long-form and usually AI-written, so over-length strings
//! are cut down to their maximum instead of failing the whole slide.

use askama::Template;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::layouts::SlideLayout;
use crate::layouts::theme::{A4_PORTRAIT, PARCHMENT};
use crate::schema::Overflow;
use crate::templates_structs::slides::TradeComplianceTemplate;

pub const GROUP: &str = "trade-compliance";

pub struct TradeComplianceOnePager;

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TradeComplianceContent {
    #[serde(default = "default_main_title")]
    #[schemars(length(min = 5, max = 100))]
    pub main_title: String,
    #[serde(default = "default_subtitle")]
    #[schemars(length(min = 10, max = 350), description = "Subtitle explaining the strategy. MAX 350 characters - 2-3 sentences.")]
    pub subtitle: String,
    #[serde(default = "default_audience_focus")]
    #[schemars(length(min = 10, max = 300), description = "Target audience description. MAX 300 characters.")]
    pub audience_focus: String,
    #[serde(default = "default_category_focus")]
    #[schemars(length(min = 10, max = 300), description = "Category focus description. MAX 300 characters.")]
    pub category_focus: String,
    #[serde(default = "default_implementation_title")]
    #[schemars(length(min = 5, max = 80))]
    pub implementation_title: String,
    #[serde(default = "default_step1")]
    pub step1: ImplementationStep,
    #[serde(default = "default_step2")]
    pub step2: ImplementationStep,
    #[serde(default = "default_step3")]
    pub step3: ImplementationStep,
    #[serde(default = "default_benefits_title")]
    #[schemars(length(min = 5, max = 80))]
    pub benefits_title: String,
    #[serde(default = "default_benefits_subtitle")]
    #[schemars(length(min = 10, max = 250), description = "Benefits section subtitle. MAX 250 characters.")]
    pub benefits_subtitle: String,
    #[serde(default = "default_benefit1")]
    pub benefit1: Benefit,
    #[serde(default = "default_benefit2")]
    pub benefit2: Benefit,
    #[serde(default = "default_benefit3")]
    pub benefit3: Benefit,
    #[serde(default = "default_benefit4")]
    pub benefit4: Benefit,
    #[serde(default = "default_key_question")]
    #[schemars(length(min = 10, max = 200))]
    pub key_question: String,
    #[serde(default = "default_key_question_answer")]
    #[schemars(length(min = 10, max = 400), description = "Answer to the key question. MAX 400 characters.")]
    pub key_question_answer: String,
    #[serde(default = "default_call_to_action")]
    #[schemars(length(min = 10, max = 350), description = "Final call to action. MAX 350 characters.")]
    pub call_to_action: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct ImplementationStep {
    #[schemars(length(min = 3, max = 60))]
    pub title: String,
    #[schemars(length(min = 5, max = 350), description = "Step description. MAX 350 characters - keep to ~3-4 sentences.")]
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct Benefit {
    #[schemars(length(min = 3, max = 50))]
    pub title: String,
    #[schemars(length(min = 5, max = 250), description = "Benefit description. MAX 250 characters - keep concise.")]
    pub description: String,
}

impl TradeComplianceContent {
    pub fn steps(&self) -> [&ImplementationStep; 3] {
        [&self.step1, &self.step2, &self.step3]
    }

    pub fn benefits(&self) -> [&Benefit; 4] {
        [&self.benefit1, &self.benefit2, &self.benefit3, &self.benefit4]
    }
}

fn step(title: &str, description: &str) -> ImplementationStep {
    ImplementationStep { title: title.into(), description: description.into() }
}

fn benefit(title: &str, description: &str) -> Benefit {
    Benefit { title: title.into(), description: description.into() }
}

fn default_main_title() -> String {
    "Master Trade Compliance: Ask the Right Questions".into()
}

fn default_subtitle() -> String {
    "Ensure export control compliance with a systematic end-use questionnaire approach. This proven method helps identify prohibited activities early, protecting your business from violations while streamlining customer onboarding for legitimate trade partners.".into()
}

fn default_audience_focus() -> String {
    "Trade compliance professionals and export control officers managing customer screening processes who need to balance thorough due diligence with operational efficiency. Essential for companies dealing with dual-use goods, technology exports, or international trade.".into()
}

fn default_category_focus() -> String {
    "Export Control Management — End-use verification strategies designed to help you identify red flags, ensure regulatory compliance, and protect your business from inadvertent support of prohibited activities.".into()
}

fn default_implementation_title() -> String {
    "Implement Your End-Use Questionnaire".into()
}

fn default_step1() -> ImplementationStep {
    step(
        "Step 1: Develop Questionnaire",
        "Create a comprehensive form covering military use, nuclear applications, chemical/biological concerns, and re-export intentions. Include verification requirements—request end-user certificates and conduct database checks for high-risk responses.",
    )
}

fn default_step2() -> ImplementationStep {
    step(
        "Step 2: Screen Each Customer",
        "For every new customer, ask three critical questions: Will products be used for military or defense purposes? Are there any connections to nuclear, chemical, or biological activities? Will items be re-exported to embargoed destinations or sanctioned parties?",
    )
}

fn default_step3() -> ImplementationStep {
    step(
        "Step 3: Verify & Document",
        "If red flags emerge, conduct enhanced due diligence including third-party verification and additional documentation. Maintain complete records of all screening activities—these audit trails demonstrate compliance during regulatory reviews.",
    )
}

fn default_benefits_title() -> String {
    "Tangible Benefits: Protect Your Business".into()
}

fn default_benefits_subtitle() -> String {
    "By implementing comprehensive end-use questionnaires, you'll achieve measurable improvements in compliance and risk management. This isn't just about avoiding penalties—it's about building sustainable international trade relationships.".into()
}

fn default_benefit1() -> Benefit {
    benefit(
        "Reduced Violation Risk",
        "Dramatically reduces exposure to export control violations, protecting your company from penalties ranging from warnings to criminal prosecution. Many companies report 70% fewer compliance incidents after implementation.",
    )
}

fn default_benefit2() -> Benefit {
    benefit(
        "Regulatory Confidence",
        "Demonstrates robust due diligence to authorities during audits and investigations. Your documented screening process becomes evidence of good faith efforts to comply with complex export regulations.",
    )
}

fn default_benefit3() -> Benefit {
    benefit(
        "Operational Efficiency",
        "Standardizes customer screening across your organization, reducing review time by up to 40%. Clear protocols eliminate guesswork and ensure consistent application of export controls regardless of sales team or region.",
    )
}

fn default_benefit4() -> Benefit {
    benefit(
        "Business Protection",
        "Preserves export privileges and market access by preventing inadvertent support of prohibited activities. The cost of implementing questionnaires is minimal compared to losing export licenses or facing reputational damage.",
    )
}

fn default_key_question() -> String {
    "How can systematic end-use questionnaires transform your compliance program from reactive to proactive?".into()
}

fn default_key_question_answer() -> String {
    "The answer lies in early detection and documentation. This systematic approach creates a defensible compliance position that satisfies regulators while enabling legitimate trade. Start with high-risk customers, refine your questions based on experience, and gradually expand to all new accounts for comprehensive protection.".into()
}

fn default_call_to_action() -> String {
    "Transform your export compliance from a cost center into a competitive advantage. Begin implementing end-use questionnaires this week—start with your next new customer inquiry. Document everything, train your team, and build a compliance culture that protects your business while facilitating legitimate international trade.".into()
}

impl SlideLayout for TradeComplianceOnePager {
    const ID: &'static str = "trade-compliance-one-pager";
    const NAME: &'static str = "Trade Compliance One-Pager";
    const DESCRIPTION: &'static str = "Professional one-pager for trade compliance best practices with three-step implementation and benefits grid.";
    const OVERFLOW: Overflow = Overflow::Truncate;

    type Content = TradeComplianceContent;

    fn render(content: &TradeComplianceContent) -> askama::Result<String> {
        TradeComplianceTemplate { layout_id: Self::ID, frame: &A4_PORTRAIT, palette: &PARCHMENT, content }.render()
    }
}

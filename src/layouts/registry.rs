use serde::Serialize;
use serde_json::{Value, json};

use super::{SlideLayout, ab4c, ab4c_a4, ab4c_new, gamma, trade_compliance};
use crate::errors::AppError;
use crate::schema::{ContentSchema, Overflow};

type ResolveFn = fn(&ContentSchema, Option<&Value>, Overflow) -> Result<Value, AppError>;
type RenderFn = fn(&ContentSchema, Option<&Value>, Overflow) -> Result<String, AppError>;

/// Type-erased layout, as stored in the registry.
pub struct LayoutEntry {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub group: &'static str,
    pub is_terminal: bool,
    pub overflow: Overflow,
    schema: ContentSchema,
    resolve_fn: ResolveFn,
    render_fn: RenderFn,
}

fn resolve_as<L: SlideLayout>(schema: &ContentSchema, data: Option<&Value>, overflow: Overflow) -> Result<Value, AppError> {
    let content: L::Content = schema.resolve(data, overflow)?;
    Ok(serde_json::to_value(&content)?)
}

fn render_as<L: SlideLayout>(schema: &ContentSchema, data: Option<&Value>, overflow: Overflow) -> Result<String, AppError> {
    let content: L::Content = schema.resolve(data, overflow)?;
    Ok(L::render(&content)?)
}

impl LayoutEntry {
    pub fn of<L: SlideLayout>(group: &'static str) -> Self {
        Self {
            id: L::ID,
            name: L::NAME,
            description: L::DESCRIPTION,
            group,
            is_terminal: L::IS_TERMINAL,
            overflow: L::OVERFLOW,
            schema: L::schema(),
            resolve_fn: resolve_as::<L>,
            render_fn: render_as::<L>,
        }
    }

    /// The generated JSON Schema document.
    pub fn schema(&self) -> &Value {
        self.schema.document()
    }

    /// Resolve to the fully defaulted content, as JSON.
    pub fn resolve(&self, data: Option<&Value>) -> Result<Value, AppError> {
        (self.resolve_fn)(&self.schema, data, self.overflow)
    }

    /// Resolve then render to an HTML fragment.
    pub fn render(&self, data: Option<&Value>) -> Result<String, AppError> {
        (self.render_fn)(&self.schema, data, self.overflow)
    }

    pub fn summary(&self) -> LayoutSummary {
        LayoutSummary {
            id: self.id,
            name: self.name,
            description: self.description,
            group: self.group,
            is_terminal: self.is_terminal,
        }
    }

    /// Catalog entry with the generated JSON Schema.
    pub fn catalog_entry(&self) -> Value {
        json!({
            "id": self.id,
            "name": self.name,
            "description": self.description,
            "json_schema": self.schema(),
            "isTerminal": self.is_terminal,
        })
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutSummary {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub group: &'static str,
    pub is_terminal: bool,
}

pub struct LayoutGroup {
    pub name: &'static str,
    /// Whether the slides must be used in catalog order.
    pub ordered: bool,
    pub layouts: Vec<LayoutEntry>,
}

impl LayoutGroup {
    pub fn catalog(&self) -> Value {
        json!({
            "name": self.name,
            "ordered": self.ordered,
            "slides": self.layouts.iter().map(LayoutEntry::catalog_entry).collect::<Vec<_>>(),
        })
    }
}

pub struct LayoutRegistry {
    groups: Vec<LayoutGroup>,
}

impl LayoutRegistry {
    pub fn new(groups: Vec<LayoutGroup>) -> Self {
        Self { groups }
    }

    /// Every layout shipped with this crate.
    pub fn builtin() -> Self {
        Self::new(vec![
            LayoutGroup {
                name: ab4c::GROUP,
                ordered: false,
                layouts: vec![
                    LayoutEntry::of::<ab4c::TitleSlide>(ab4c::GROUP),
                    LayoutEntry::of::<ab4c::AgendaTimeline>(ab4c::GROUP),
                    LayoutEntry::of::<ab4c::SectionHeader>(ab4c::GROUP),
                    LayoutEntry::of::<ab4c::ProcessFlow>(ab4c::GROUP),
                    LayoutEntry::of::<ab4c::QuizAssessment>(ab4c::GROUP),
                    LayoutEntry::of::<ab4c::KeyTakeaways>(ab4c::GROUP),
                    LayoutEntry::of::<ab4c::ThankYouClosing>(ab4c::GROUP),
                ],
            },
            LayoutGroup {
                name: ab4c_new::GROUP,
                ordered: false,
                layouts: vec![
                    LayoutEntry::of::<ab4c_new::StatisticsHighlight>(ab4c_new::GROUP),
                    LayoutEntry::of::<ab4c_new::DualQuote>(ab4c_new::GROUP),
                    LayoutEntry::of::<ab4c_new::NumberedSteps>(ab4c_new::GROUP),
                    LayoutEntry::of::<ab4c_new::FourStepProcess>(ab4c_new::GROUP),
                    LayoutEntry::of::<ab4c_new::HorizontalTimeline>(ab4c_new::GROUP),
                    LayoutEntry::of::<ab4c_new::CircularProcess>(ab4c_new::GROUP),
                ],
            },
            LayoutGroup {
                name: ab4c_a4::GROUP,
                ordered: false,
                layouts: vec![LayoutEntry::of::<ab4c_a4::A4OnePager>(ab4c_a4::GROUP)],
            },
            LayoutGroup {
                name: gamma::GROUP,
                ordered: false,
                layouts: vec![
                    LayoutEntry::of::<gamma::TitleWithImage>(gamma::GROUP),
                    LayoutEntry::of::<gamma::TwoColumnText>(gamma::GROUP),
                    LayoutEntry::of::<gamma::TwoColumnBoxes>(gamma::GROUP),
                    LayoutEntry::of::<gamma::ThreeColumnCards>(gamma::GROUP),
                    LayoutEntry::of::<gamma::ContentImageCallout>(gamma::GROUP),
                    LayoutEntry::of::<gamma::DiagramWithContent>(gamma::GROUP),
                    LayoutEntry::of::<gamma::CaseStudySimple>(gamma::GROUP),
                    LayoutEntry::of::<gamma::CaseStudyComplex>(gamma::GROUP),
                    LayoutEntry::of::<gamma::ExerciseActivity>(gamma::GROUP),
                    LayoutEntry::of::<gamma::ScenarioDiscussion>(gamma::GROUP),
                    LayoutEntry::of::<gamma::KnowledgeQuiz>(gamma::GROUP),
                ],
            },
            LayoutGroup {
                name: trade_compliance::GROUP,
                ordered: false,
                layouts: vec![LayoutEntry::of::<trade_compliance::TradeComplianceOnePager>(
                    trade_compliance::GROUP,
                )],
            },
        ])
    }

    pub fn groups(&self) -> &[LayoutGroup] {
        &self.groups
    }

    pub fn group(&self, name: &str) -> Option<&LayoutGroup> {
        self.groups.iter().find(|g| g.name == name)
    }

    pub fn layouts(&self) -> impl Iterator<Item = &LayoutEntry> {
        self.groups.iter().flat_map(|g| g.layouts.iter())
    }

    pub fn get(&self, id: &str) -> Option<&LayoutEntry> {
        self.layouts().find(|l| l.id == id)
    }

    pub fn find(&self, id: &str) -> Result<&LayoutEntry, AppError> {
        self.get(id).ok_or_else(|| AppError::UnknownLayout(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn layout_ids_are_unique() {
        let registry = LayoutRegistry::builtin();
        let mut seen = HashSet::new();
        for layout in registry.layouts() {
            assert!(seen.insert(layout.id), "duplicate layout id {}", layout.id);
        }
        assert_eq!(seen.len(), 26);
    }

    #[test]
    fn group_catalog_lists_slides_in_order() {
        let registry = LayoutRegistry::builtin();
        let catalog = registry.group(ab4c::GROUP).unwrap().catalog();
        assert_eq!(catalog["name"], "ab4c");
        assert_eq!(catalog["slides"][0]["id"], "01-title-slide");
        assert_eq!(catalog["slides"][6]["isTerminal"], true);
        assert_eq!(catalog["slides"][0]["json_schema"]["type"], "object");
    }

    #[test]
    fn unknown_layout_is_an_error() {
        let registry = LayoutRegistry::builtin();
        assert!(matches!(registry.find("nope"), Err(AppError::UnknownLayout(_))));
    }

    #[test]
    fn every_group_is_listed_once() {
        let registry = LayoutRegistry::builtin();
        let names: Vec<&str> = registry.groups().iter().map(|g| g.name).collect();
        assert_eq!(names, vec!["ab4c", "ab4c-new", "ab4c-a4", "gamma", "trade-compliance"]);
        for group in registry.groups() {
            assert!(!group.layouts.is_empty(), "{}", group.name);
            assert!(group.layouts.iter().all(|l| l.group == group.name), "{}", group.name);
        }
    }

    #[test]
    fn every_schema_compiles_and_resolves_defaults() {
        let registry = LayoutRegistry::builtin();
        for layout in registry.layouts() {
            layout.resolve(None).unwrap_or_else(|e| panic!("{}: {e}", layout.id));
        }
    }
}

//! Slide layouts: each pairs a typed content schema with an askama renderer.

pub mod ab4c;
pub mod ab4c_a4;
pub mod ab4c_new;
pub mod common;
pub mod gamma;
mod registry;
pub mod theme;
pub mod trade_compliance;

use schemars::JsonSchema;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::errors::AppError;
use crate::schema::{ContentSchema, Overflow};

pub use registry::{LayoutEntry, LayoutGroup, LayoutRegistry, LayoutSummary};

/// A selectable slide template.
///
/// `Content` carries the schema: bounds and descriptions as `schemars`
/// attributes, defaults as `serde(default)` functions. `render` only ever sees
/// content that has been resolved against it.
pub trait SlideLayout {
    const ID: &'static str;
    const NAME: &'static str;
    /// Tells the layout selector what content this slide suits.
    const DESCRIPTION: &'static str;
    /// Closing slides that must come last in a deck.
    const IS_TERMINAL: bool = false;
    const OVERFLOW: Overflow = Overflow::Reject;

    type Content: DeserializeOwned + Serialize + JsonSchema;

    fn render(content: &Self::Content) -> askama::Result<String>;

    fn schema() -> ContentSchema {
        ContentSchema::of::<Self::Content>()
    }

    /// Resolve optional partial data into typed content. `None` yields defaults.
    fn resolve(data: Option<&Value>) -> Result<Self::Content, AppError> {
        Self::schema().resolve(data, Self::OVERFLOW)
    }
}

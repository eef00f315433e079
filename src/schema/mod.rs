//! Content schemas for slide layouts.
//!
//! Every layout's content type derives `JsonSchema`. The generated document is
//! what the content generator is shown, and it is also what untrusted input is
//! checked against. [`ContentSchema::resolve`] fills defaults taken from the
//! document, drops unknown keys and `null`s, validates with `jsonschema` and
//! finally deserializes into the typed content.

mod error;
mod fill;
mod lenient;

use jsonschema::JSONSchema;
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::errors::AppError;

pub use error::{Issue, ValidationErrors};
pub use fill::Overflow;
pub use lenient::lenient_url;

/// Generated JSON Schema for one content type, compiled once.
pub struct ContentSchema {
    document: Value,
    validator: Result<JSONSchema, String>,
}

impl ContentSchema {
    pub fn of<T: JsonSchema>() -> Self {
        let name = std::any::type_name::<T>();
        let compiled = serde_json::to_value(schemars::schema_for!(T))
            .map_err(|e| e.to_string())
            .map(|document| {
                let validator = JSONSchema::compile(&document).map_err(|e| e.to_string());
                (document, validator)
            });

        match compiled {
            Ok((document, validator)) => {
                if let Err(e) = &validator {
                    log::error!("Schema for {name} does not compile: {e}");
                }
                Self { document, validator }
            }
            Err(e) => {
                log::error!("Schema for {name} does not serialize: {e}");
                Self { document: Value::Null, validator: Err(e) }
            }
        }
    }

    /// The JSON Schema document, as served to the content generator.
    pub fn document(&self) -> &Value {
        &self.document
    }

    /// Turn optional partial data into typed content. `None` and `null` mean `{}`.
    pub fn resolve<T: DeserializeOwned>(&self, data: Option<&Value>, overflow: Overflow) -> Result<T, AppError> {
        let validator = self.validator.as_ref().map_err(|e| AppError::Schema(e.clone()))?;

        let empty = Value::Object(Map::new());
        let input = data.filter(|v| !v.is_null()).unwrap_or(&empty);
        let filled = fill::Filler::new(&self.document, overflow).fill(&self.document, input);

        if let Err(errors) = validator.validate(&filled) {
            let issues: Vec<Issue> = errors.map(|e| Issue::from(&e)).collect();
            return Err(ValidationErrors::new(issues).into());
        }

        serde_json::from_value(filled).map_err(|e| ValidationErrors::new(vec![Issue::new("", e.to_string())]).into())
    }
}

use std::borrow::Cow;

use serde_json::{Map, Value};

/// What to do with strings longer than their declared maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overflow {
    #[default]
    Reject,
    /// Cut to `max - 3` characters and append `...` before validating.
    Truncate,
}

/// Lengths are counted in chars, matching `maxLength`.
pub fn truncate_with_ellipsis(value: &str, max: usize) -> Cow<'_, str> {
    if value.chars().count() <= max {
        return Cow::Borrowed(value);
    }
    let mut cut: String = value.chars().take(max.saturating_sub(3)).collect();
    cut.push_str("...");
    Cow::Owned(cut)
}

/// Walks a generated schema document alongside untrusted input, producing a
/// copy with defaults filled in and unknown keys removed.
///
/// Nothing is validated here; the output is handed to the compiled validator.
pub(super) struct Filler<'a> {
    definitions: Option<&'a Map<String, Value>>,
    overflow: Overflow,
}

impl<'a> Filler<'a> {
    pub(super) fn new(document: &'a Value, overflow: Overflow) -> Self {
        Self { definitions: document.get("definitions").and_then(Value::as_object), overflow }
    }

    pub(super) fn fill(&self, schema: &'a Value, value: &Value) -> Value {
        let schema = self.concrete(schema);
        match value {
            Value::Object(map) => match schema.get("properties").and_then(Value::as_object) {
                Some(properties) => Value::Object(self.fill_object(properties, map)),
                None => value.clone(),
            },
            Value::Array(items) => match schema.get("items").filter(|s| s.is_object()) {
                Some(item) => Value::Array(items.iter().map(|v| self.fill(item, v)).collect()),
                None => value.clone(),
            },
            Value::String(s) => Value::String(self.fit(schema, s)),
            _ => value.clone(),
        }
    }

    /// `default` sits on the property, next to any `$ref` it wraps.
    fn fill_object(&self, properties: &'a Map<String, Value>, input: &Map<String, Value>) -> Map<String, Value> {
        let mut out = Map::new();
        for (name, property) in properties {
            let supplied = input.get(name).filter(|v| !v.is_null());
            let default = property.get("default").filter(|v| !v.is_null());
            if let Some(source) = supplied.or(default) {
                out.insert(name.clone(), self.fill(property, source));
            }
        }
        out
    }

    fn fit(&self, schema: &Value, value: &str) -> String {
        let max = schema.get("maxLength").and_then(Value::as_u64);
        match (self.overflow, max) {
            (Overflow::Truncate, Some(max)) => {
                let max = usize::try_from(max).unwrap_or(usize::MAX);
                let cut = truncate_with_ellipsis(value, max);
                if let Cow::Owned(_) = cut {
                    log::debug!("Truncated string to {max} characters");
                }
                cut.into_owned()
            }
            _ => value.to_string(),
        }
    }

    /// Follow `$ref`, `allOf` and nullable `anyOf` wrappers down to the
    /// schema describing the value itself.
    fn concrete(&self, mut schema: &'a Value) -> &'a Value {
        loop {
            let next = match schema.get("$ref").and_then(Value::as_str) {
                Some(target) => target
                    .strip_prefix("#/definitions/")
                    .and_then(|name| self.definitions?.get(name)),
                None => ["allOf", "anyOf"]
                    .iter()
                    .find_map(|key| schema.get(*key).and_then(Value::as_array))
                    .and_then(|variants| variants.iter().find(|v| !is_null_schema(v))),
            };
            match next {
                Some(inner) => schema = inner,
                None => return schema,
            }
        }
    }
}

fn is_null_schema(schema: &Value) -> bool {
    schema.get("type").and_then(Value::as_str) == Some("null")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn truncation_counts_chars_not_bytes() {
        assert_eq!(truncate_with_ellipsis("£££££", 5), "£££££");
        assert_eq!(truncate_with_ellipsis("££££££", 5), "££...");
        assert_eq!(truncate_with_ellipsis("abc", 2), "...");
    }

    #[test]
    fn follows_refs_and_nullable_wrappers() {
        let document = json!({
            "type": "object",
            "properties": {
                "box": {
                    "anyOf": [{ "$ref": "#/definitions/Box" }, { "type": "null" }],
                    "default": { "label": "Boxed" }
                },
                "tags": { "type": "array", "items": { "type": "string", "maxLength": 4 } }
            },
            "definitions": {
                "Box": {
                    "type": "object",
                    "properties": {
                        "label": { "type": "string", "maxLength": 5 },
                        "size": { "type": "integer", "default": 3 }
                    }
                }
            }
        });
        let filler = Filler::new(&document, Overflow::Truncate);

        let out = filler.fill(&document, &json!({ "tags": ["short", "ok"] }));
        assert_eq!(out, json!({ "box": { "label": "Boxed", "size": 3 }, "tags": ["s...", "ok"] }));

        let out = filler.fill(&document, &json!({ "box": { "label": "Longer label", "x": 1 } }));
        assert_eq!(out, json!({ "box": { "label": "Lo...", "size": 3 } }));
    }
}

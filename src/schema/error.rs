use jsonschema::ValidationError;
use jsonschema::error::ValidationErrorKind;
use serde::Serialize;
use std::fmt;

/// One failed check, addressed by a dotted path such as `steps.2.title`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Issue {
    pub path: String,
    pub message: String,
}

impl Issue {
    pub fn new(path: &str, message: impl Into<String>) -> Self {
        let path = if path.is_empty() { "(root)".to_string() } else { path.to_string() };
        Self { path, message: message.into() }
    }
}

/// A `required` failure points at the missing property, not its parent.
impl From<&ValidationError<'_>> for Issue {
    fn from(error: &ValidationError<'_>) -> Self {
        let mut path = error.instance_path.clone().into_vec();
        if let ValidationErrorKind::Required { property } = &error.kind {
            if let Some(name) = property.as_str() {
                path.push(name.to_string());
            }
        }
        Issue::new(&path.join("."), error.to_string())
    }
}

/// All issues collected during one resolve pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors(Vec<Issue>);

impl ValidationErrors {
    pub fn new(issues: Vec<Issue>) -> Self {
        Self(issues)
    }

    pub fn issues(&self) -> &[Issue] {
        &self.0
    }

    pub fn has_path(&self, path: &str) -> bool {
        self.0.iter().any(|i| i.path == path)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(|i| format!("{}: {}", i.path, i.message)).collect();
        write!(f, "{}", parts.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

//! Field-level schema checks shared by the entity constructors.

use serde_json::Value;

use crate::error::DomainError;

/// Collects every failing path before reporting, so one response lists
/// all problems with a document.
pub(crate) struct SchemaCheck {
    model: &'static str,
    errors: Vec<String>,
}

impl SchemaCheck {
    pub(crate) fn new(model: &'static str) -> Self {
        Self {
            model,
            errors: Vec::new(),
        }
    }

    pub(crate) fn required(&mut self, path: &str, value: &str) -> &mut Self {
        if value.is_empty() {
            self.errors
                .push(format!("{path}: Path `{path}` is required."));
        }
        self
    }

    /// Length is measured in UTF-16 code units, so characters outside the
    /// BMP count twice.
    pub(crate) fn max_length(&mut self, path: &str, value: &str, max: usize) -> &mut Self {
        if value.encode_utf16().count() > max {
            self.errors.push(format!(
                "{path}: Path `{path}` (`{value}`) is longer than the maximum allowed length ({max})."
            ));
        }
        self
    }

    pub(crate) fn cast_failed(&mut self, path: &str, kind: &str, value: &str) -> &mut Self {
        self.errors.push(format!(
            "{path}: Cast to {kind} failed for value \"{value}\" at path \"{path}\""
        ));
        self
    }

    pub(crate) fn finish(&self) -> Result<(), DomainError> {
        if self.errors.is_empty() {
            return Ok(());
        }
        Err(self.error())
    }

    /// The accumulated failures as a single validation error.
    pub(crate) fn error(&self) -> DomainError {
        DomainError::Validation(format!(
            "{} validation failed: {}",
            self.model,
            self.errors.join(", ")
        ))
    }
}

/// Cast a loosely typed request value to the string stored at `path`.
pub fn cast_field(model: &'static str, path: &str, value: &Value) -> Result<String, DomainError> {
    match cast_string(value) {
        Some(text) => Ok(text),
        None => Err(SchemaCheck::new(model)
            .cast_failed(path, "string", &value.to_string())
            .error()),
    }
}

/// Coerce a JSON value assigned to a string path.
///
/// Scalars become their textual form and `null` clears the field; arrays
/// and objects cannot be stored in a string path.
pub(crate) fn cast_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Null => Some(String::new()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Array(_) | Value::Object(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_collects_all_errors() {
        let err = SchemaCheck::new("Blog")
            .required("title", "")
            .required("author", "")
            .finish()
            .unwrap_err();

        let msg = err.to_string();
        assert!(msg.starts_with("Blog validation failed: "));
        assert!(msg.contains("title: Path `title` is required."));
        assert!(msg.contains("author: Path `author` is required."));
    }

    #[test]
    fn test_max_length_counts_utf16_units() {
        // 15 Hangul syllables: 45 bytes, 15 UTF-16 units
        let title = "가".repeat(15);
        assert!(SchemaCheck::new("Blog")
            .max_length("title", &title, 15)
            .finish()
            .is_ok());

        // 8 emoji: 8 chars, 16 UTF-16 units
        let title = "😀".repeat(8);
        assert!(SchemaCheck::new("Blog")
            .max_length("title", &title, 15)
            .finish()
            .is_err());
    }

    #[test]
    fn test_cast_field() {
        assert_eq!(cast_field("Blog", "title", &json!(12345)).unwrap(), "12345");
        let err = cast_field("Blog", "title", &json!(["a"])).unwrap_err();
        assert!(err.to_string().contains("Cast to string failed"));
    }

    #[test]
    fn test_cast_string() {
        assert_eq!(cast_string(&json!(5)), Some("5".to_string()));
        assert_eq!(cast_string(&json!(null)), Some(String::new()));
        assert_eq!(cast_string(&json!({"a": 1})), None);
    }
}

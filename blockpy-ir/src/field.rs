//! Field values carried by block nodes.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Value of a named block field.
///
/// Fields hold literal data entered in the editor (text, numbers, dropdown
/// choices serialized as strings) or a variable reference, which the save
/// format writes as `{"id": "..."}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Bool(bool),
    Number(f64),
    Text(String),
    Variable { id: String },
}

impl FieldValue {
    /// Build a variable-reference field.
    pub fn variable(id: impl Into<String>) -> Self {
        Self::Variable { id: id.into() }
    }

    /// The field as text, if it holds text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// The variable id referenced by this field.
    ///
    /// Older save files store the id as a bare string, so `Text` is accepted
    /// as a fallback.
    pub fn variable_id(&self) -> Option<&str> {
        match self {
            Self::Variable { id } => Some(id),
            Self::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for FieldValue {
    /// String coercion of the raw field value (`3.5` → `3.5`, `42` → `42`).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
            Self::Variable { id } => f.write_str(id),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<f64> for FieldValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_shapes() {
        let v: FieldValue = serde_json::from_str("\"TRUE\"").unwrap();
        assert_eq!(v, FieldValue::Text("TRUE".into()));

        let v: FieldValue = serde_json::from_str("3.5").unwrap();
        assert_eq!(v, FieldValue::Number(3.5));

        let v: FieldValue = serde_json::from_str("42").unwrap();
        assert_eq!(v, FieldValue::Number(42.0));

        let v: FieldValue = serde_json::from_str("true").unwrap();
        assert_eq!(v, FieldValue::Bool(true));

        let v: FieldValue = serde_json::from_str("{\"id\": \"var1\"}").unwrap();
        assert_eq!(v.variable_id(), Some("var1"));
    }

    #[test]
    fn test_display_matches_source_spelling() {
        assert_eq!(FieldValue::Number(3.5).to_string(), "3.5");
        assert_eq!(FieldValue::Number(42.0).to_string(), "42");
        assert_eq!(FieldValue::Text("hi".into()).to_string(), "hi");
    }
}

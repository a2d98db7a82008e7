//! Editor palette configuration.
//!
//! The toolbox is pure data: a flat list of block kinds the editor offers.
//! It serializes to the JSON shape the editor consumes.

use serde::Serialize;

/// A flyout toolbox listing user-selectable block kinds.
#[derive(Debug, Clone, Serialize)]
pub struct Toolbox {
    pub kind: &'static str,
    pub contents: Vec<ToolboxEntry>,
}

/// One palette entry.
#[derive(Debug, Clone, Serialize)]
pub struct ToolboxEntry {
    pub kind: &'static str,
    #[serde(rename = "type")]
    pub block_type: String,
}

impl Toolbox {
    /// Build a flyout toolbox from block kind identifiers.
    pub fn flyout<I, S>(block_types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            kind: "flyoutToolbox",
            contents: block_types
                .into_iter()
                .map(|t| ToolboxEntry {
                    kind: "block",
                    block_type: t.into(),
                })
                .collect(),
        }
    }

    /// The listed block kind identifiers, in palette order.
    pub fn block_types(&self) -> impl Iterator<Item = &str> {
        self.contents.iter().map(|e| e.block_type.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_to_editor_shape() {
        let toolbox = Toolbox::flyout(["math_number", "text"]);
        let json = serde_json::to_value(&toolbox).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "kind": "flyoutToolbox",
                "contents": [
                    {"kind": "block", "type": "math_number"},
                    {"kind": "block", "type": "text"},
                ]
            })
        );
    }
}

//! Block kind identifiers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Kind tag of a block node.
///
/// Covers every block the Python backend can render. Kinds outside this set
/// survive deserialization as [`BlockKind::Unknown`], so a whole program can
/// be loaded and inspected even when it contains blocks no renderer handles;
/// generation rejects the unsupported node, not the parser.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BlockKind {
    LogicNull,
    Text,
    MathNumber,
    LogicBoolean,
    Member,
    ListsCreateWith,
    ListsCreateWithItem,
    ListsCreateWithContainer,
    Object,
    ControlsIf,
    ControlsIfElse,
    LogicCompare,
    LogicOperation,
    LogicNegate,
    LogicTernary,
    VariablesGet,
    VariablesSet,
    TextPrint,
    /// A kind this crate has no variant for.
    Unknown(String),
}

impl BlockKind {
    /// The kind identifier as it appears in the save format.
    pub fn as_str(&self) -> &str {
        match self {
            Self::LogicNull => "logic_null",
            Self::Text => "text",
            Self::MathNumber => "math_number",
            Self::LogicBoolean => "logic_boolean",
            Self::Member => "member",
            Self::ListsCreateWith => "lists_create_with",
            Self::ListsCreateWithItem => "lists_create_with_item",
            Self::ListsCreateWithContainer => "lists_create_with_container",
            Self::Object => "object",
            Self::ControlsIf => "controls_if",
            Self::ControlsIfElse => "controls_ifelse",
            Self::LogicCompare => "logic_compare",
            Self::LogicOperation => "logic_operation",
            Self::LogicNegate => "logic_negate",
            Self::LogicTernary => "logic_ternary",
            Self::VariablesGet => "variables_get",
            Self::VariablesSet => "variables_set",
            Self::TextPrint => "text_print",
            Self::Unknown(name) => name,
        }
    }

    /// Whether a renderer exists for this kind.
    pub fn is_supported(&self) -> bool {
        !matches!(self, Self::Unknown(_))
    }
}

impl From<&str> for BlockKind {
    fn from(name: &str) -> Self {
        match name {
            "logic_null" => Self::LogicNull,
            "text" => Self::Text,
            "math_number" => Self::MathNumber,
            "logic_boolean" => Self::LogicBoolean,
            "member" => Self::Member,
            "lists_create_with" => Self::ListsCreateWith,
            "lists_create_with_item" => Self::ListsCreateWithItem,
            "lists_create_with_container" => Self::ListsCreateWithContainer,
            "object" => Self::Object,
            "controls_if" => Self::ControlsIf,
            "controls_ifelse" => Self::ControlsIfElse,
            "logic_compare" => Self::LogicCompare,
            "logic_operation" => Self::LogicOperation,
            "logic_negate" => Self::LogicNegate,
            "logic_ternary" => Self::LogicTernary,
            "variables_get" => Self::VariablesGet,
            "variables_set" => Self::VariablesSet,
            "text_print" => Self::TextPrint,
            _ => Self::Unknown(name.to_string()),
        }
    }
}

impl From<String> for BlockKind {
    fn from(name: String) -> Self {
        match Self::from(name.as_str()) {
            Self::Unknown(_) => Self::Unknown(name),
            known => known,
        }
    }
}

impl From<BlockKind> for String {
    fn from(kind: BlockKind) -> Self {
        match kind {
            BlockKind::Unknown(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_known_kinds() {
        for name in [
            "logic_null",
            "text",
            "math_number",
            "logic_boolean",
            "member",
            "lists_create_with",
            "object",
            "controls_if",
            "controls_ifelse",
            "logic_compare",
            "logic_operation",
            "logic_negate",
            "logic_ternary",
            "variables_get",
            "variables_set",
            "text_print",
        ] {
            let kind = BlockKind::from(name);
            assert!(kind.is_supported(), "{name} parsed as Unknown");
            assert_eq!(kind.as_str(), name);
        }
    }

    #[test]
    fn test_unknown_kind_preserved() {
        let kind = BlockKind::from("controls_repeat_ext");
        assert_eq!(kind, BlockKind::Unknown("controls_repeat_ext".into()));
        assert!(!kind.is_supported());
        assert_eq!(kind.as_str(), "controls_repeat_ext");
    }

    #[test]
    fn test_serde_as_plain_string() {
        let kind: BlockKind = serde_json::from_str("\"logic_compare\"").unwrap();
        assert_eq!(kind, BlockKind::LogicCompare);
        assert_eq!(serde_json::to_string(&kind).unwrap(), "\"logic_compare\"");
    }
}

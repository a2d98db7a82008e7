//! Block nodes and their connections.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::{BlockKind, FieldValue};

/// One node of the visual program tree.
///
/// A block carries a kind tag, named field values, named input slots (value
/// inputs and statement inputs share the same wire shape), optional mutator
/// state, and an optional `next` link chaining statement sequences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    #[serde(rename = "type")]
    pub kind: BlockKind,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,

    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub fields: IndexMap<String, FieldValue>,

    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub inputs: IndexMap<String, Connection>,

    #[serde(
        default,
        rename = "extraState",
        skip_serializing_if = "Option::is_none"
    )]
    pub extra_state: Option<ExtraState>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<Box<Connection>>,
}

/// A connected child block (`{"block": {...}}` in the save format).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Connection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block: Option<Box<Block>>,
}

/// Mutator state serialized alongside list and conditional blocks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtraState {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_count: Option<usize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub else_if_count: Option<usize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_else: Option<bool>,
}

impl Block {
    /// Create an empty block of the given kind.
    pub fn new(kind: impl Into<BlockKind>) -> Self {
        Self {
            kind: kind.into(),
            id: String::new(),
            fields: IndexMap::new(),
            inputs: IndexMap::new(),
            extra_state: None,
            next: None,
        }
    }

    /// Set the block id.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Set a field value.
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Connect a child block to a named input slot.
    pub fn with_input(mut self, name: impl Into<String>, child: Block) -> Self {
        self.inputs.insert(
            name.into(),
            Connection {
                block: Some(Box::new(child)),
            },
        );
        self
    }

    /// Declare an input slot with nothing connected to it.
    pub fn with_empty_input(mut self, name: impl Into<String>) -> Self {
        self.inputs.insert(name.into(), Connection { block: None });
        self
    }

    /// Set the mutator state.
    pub fn with_extra_state(mut self, state: ExtraState) -> Self {
        self.extra_state = Some(state);
        self
    }

    /// Chain a following statement block.
    pub fn with_next(mut self, next: Block) -> Self {
        self.next = Some(Box::new(Connection {
            block: Some(Box::new(next)),
        }));
        self
    }

    /// Look up a field value by name.
    pub fn field(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    /// Look up a field's text by name.
    pub fn field_text(&self, name: &str) -> Option<&str> {
        self.field(name).and_then(FieldValue::as_text)
    }

    /// Whether the named input slot exists, connected or not.
    pub fn has_input(&self, name: &str) -> bool {
        self.inputs.contains_key(name)
    }

    /// The block connected to the named input slot, if any.
    pub fn input_block(&self, name: &str) -> Option<&Block> {
        self.inputs
            .get(name)
            .and_then(|conn| conn.block.as_deref())
    }

    /// The statement block chained after this one, if any.
    pub fn next_block(&self) -> Option<&Block> {
        self.next.as_ref().and_then(|conn| conn.block.as_deref())
    }

    /// Number of item slots on a list block.
    ///
    /// Prefers the serialized mutator count, otherwise counts contiguous
    /// `ADD0`, `ADD1`, … inputs.
    pub fn item_count(&self) -> usize {
        if let Some(count) = self.extra_state.as_ref().and_then(|s| s.item_count) {
            return count;
        }
        let mut n = 0;
        while self.has_input(&format!("ADD{n}")) {
            n += 1;
        }
        n
    }

    /// Serialized else-if arm count on a conditional block.
    pub fn else_if_count(&self) -> usize {
        self.extra_state
            .as_ref()
            .and_then(|s| s.else_if_count)
            .unwrap_or(0)
    }

    /// Whether the mutator state records an else arm.
    pub fn has_else_state(&self) -> bool {
        self.extra_state
            .as_ref()
            .and_then(|s| s.has_else)
            .unwrap_or(false)
    }

    /// Depth-first traversal of this block, its inputs, and its successors.
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants { stack: vec![self] }
    }
}

/// Iterator over a block subtree, in source order.
pub struct Descendants<'a> {
    stack: Vec<&'a Block>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Block;

    fn next(&mut self) -> Option<Self::Item> {
        let block = self.stack.pop()?;
        if let Some(next) = block.next_block() {
            self.stack.push(next);
        }
        for conn in block.inputs.values().rev() {
            if let Some(child) = conn.block.as_deref() {
                self.stack.push(child);
            }
        }
        Some(block)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_save_format() {
        let json = r#"{
            "type": "controls_if",
            "id": "b1",
            "extraState": {"elseIfCount": 1, "hasElse": true},
            "inputs": {
                "IF0": {"block": {"type": "logic_boolean", "fields": {"BOOL": "TRUE"}}}
            },
            "next": {"block": {"type": "text_print", "id": "b2"}}
        }"#;
        let block: Block = serde_json::from_str(json).unwrap();

        assert_eq!(block.kind, BlockKind::ControlsIf);
        assert_eq!(block.else_if_count(), 1);
        assert!(block.has_else_state());

        let cond = block.input_block("IF0").unwrap();
        assert_eq!(cond.kind, BlockKind::LogicBoolean);
        assert_eq!(cond.field_text("BOOL"), Some("TRUE"));

        assert_eq!(block.next_block().unwrap().kind, BlockKind::TextPrint);
    }

    #[test]
    fn test_item_count_fallbacks() {
        let with_state = Block::new("lists_create_with").with_extra_state(ExtraState {
            item_count: Some(3),
            ..Default::default()
        });
        assert_eq!(with_state.item_count(), 3);

        let counted = Block::new("lists_create_with")
            .with_input("ADD0", Block::new("math_number").with_field("NUM", 1.0))
            .with_input("ADD1", Block::new("math_number").with_field("NUM", 2.0));
        assert_eq!(counted.item_count(), 2);

        assert_eq!(Block::new("lists_create_with").item_count(), 0);
    }

    #[test]
    fn test_descendants_walks_inputs_and_next() {
        let tree = Block::new("controls_if")
            .with_input("IF0", Block::new("logic_boolean"))
            .with_input(
                "DO0",
                Block::new("variables_set").with_input("VALUE", Block::new("math_number")),
            )
            .with_next(Block::new("text_print"));

        let kinds: Vec<_> = tree.descendants().map(|b| b.kind.as_str()).collect();
        assert_eq!(
            kinds,
            [
                "controls_if",
                "logic_boolean",
                "variables_set",
                "math_number",
                "text_print",
            ]
        );
    }
}

//! Saved workspace: variable declarations plus top-level block stacks.

use serde::{Deserialize, Serialize};

use crate::{Block, Result};

/// A complete saved program, matching the workspace save JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Program {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub variables: Vec<VariableDef>,

    #[serde(default)]
    pub blocks: BlockList,
}

/// A declared workspace variable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariableDef {
    pub name: String,
    pub id: String,
}

/// Top-level block stacks, nested under a format version tag.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BlockList {
    #[serde(default, rename = "languageVersion")]
    pub language_version: u32,

    #[serde(default)]
    pub blocks: Vec<Block>,
}

impl Program {
    /// Create an empty program.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a workspace variable.
    pub fn with_variable(mut self, id: impl Into<String>, name: impl Into<String>) -> Self {
        self.variables.push(VariableDef {
            name: name.into(),
            id: id.into(),
        });
        self
    }

    /// Add a top-level block stack.
    pub fn with_block(mut self, block: Block) -> Self {
        self.blocks.blocks.push(block);
        self
    }

    /// Parse a program from workspace save JSON.
    pub fn from_json(src: &str) -> Result<Self> {
        Ok(serde_json::from_str(src)?)
    }

    /// The top-level block stacks, in workspace order.
    pub fn top_blocks(&self) -> &[Block] {
        &self.blocks.blocks
    }

    /// Every block in the program, depth-first.
    pub fn all_blocks(&self) -> impl Iterator<Item = &Block> {
        self.top_blocks().iter().flat_map(Block::descendants)
    }

    /// The declared name for a variable id.
    pub fn variable_name(&self, id: &str) -> Option<&str> {
        self.variables
            .iter()
            .find(|v| v.id == id)
            .map(|v| v.name.as_str())
    }
}

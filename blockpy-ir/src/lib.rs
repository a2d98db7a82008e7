//! Block-tree representation for the blockpy Python generator.
//!
//! This crate provides the data model consumed by the code generation
//! pipeline. The types mirror the Blockly JSON save format, so a workspace
//! exported by the visual editor deserializes directly into a [`Program`].
//!
//! # Architecture
//!
//! ```text
//! workspace save (JSON) → blockpy-ir (block tree) → blockpy-codegen-python
//! ```
//!
//! The types are designed to be:
//! - Target-language agnostic (no Python-specific concerns)
//! - Lenient: unknown block kinds and missing inputs load fine; rejecting
//!   them is the generator's decision, not the parser's
//! - Deterministic: field and input order is preserved as serialized

mod block;
mod error;
mod field;
mod kind;
mod program;

pub use block::{Block, Connection, Descendants, ExtraState};
pub use error::{Error, Result};
pub use field::FieldValue;
pub use kind::BlockKind;
pub use program::{BlockList, Program, VariableDef};

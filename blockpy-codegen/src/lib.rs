//! Shared code generation utilities for the blockpy Python generator.
//!
//! This crate provides the target-language-agnostic pieces used by language
//! backends (currently `blockpy-codegen-python`):
//!
//! - [`NameTable`] - Pass-scoped, collision-free variable naming
//! - [`Indent`] / [`prefix_lines`] - Indentation of statement bodies
//! - [`Toolbox`] - Editor palette configuration (pure data)

mod indent;
mod naming;
mod toolbox;

pub use indent::{Indent, prefix_lines};
pub use naming::{NameKind, NameTable};
pub use toolbox::{Toolbox, ToolboxEntry};

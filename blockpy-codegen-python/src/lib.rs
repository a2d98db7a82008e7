//! Python code generator for blockpy block programs.
//!
//! This crate lowers a [`blockpy_ir::Program`] to Python source text. Each
//! supported block kind has a renderer producing either a statement or an
//! expression tagged with its operator-precedence rank; the driver
//! substitutes child expressions with minimal parenthesization and resolves
//! variable names through a pass-scoped name table.
//!
//! # Usage
//!
//! ```
//! use blockpy_codegen_python::PythonGenerator;
//! use blockpy_ir::Block;
//!
//! let program = blockpy_ir::Program::new()
//!     .with_block(Block::new("text_print").with_input(
//!         "TEXT",
//!         Block::new("text").with_field("TEXT", "hello"),
//!     ));
//!
//! let code = PythonGenerator::new().generate(&program)?;
//! assert_eq!(code, "print(\"hello\")\n");
//! # Ok::<(), blockpy_codegen_python::Error>(())
//! ```
//!
//! Generation is lenient by contract: a missing input never fails, it is
//! substituted with a default literal so the output always parses. The one
//! hard failure is a block kind with no renderer.

mod blocks;
mod error;
mod generator;
mod order;
mod reserved;
mod toolbox;

pub use error::{Error, Result};
pub use generator::{Code, PythonGenerator};
pub use order::Order;
pub use reserved::RESERVED_WORDS;
pub use toolbox::{PALETTE, toolbox};

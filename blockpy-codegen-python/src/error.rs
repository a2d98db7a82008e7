//! Code generation failures.

use thiserror::Error;

/// Result type for Python generation.
pub type Result<T> = std::result::Result<T, Error>;

/// Generation errors.
///
/// Missing inputs are never errors (they become default literals); these
/// cover wiring the generator cannot interpret at all.
#[derive(Debug, Error, PartialEq)]
pub enum Error {
    /// A block kind no renderer is registered for reached the driver.
    #[error("no renderer for block kind `{0}`")]
    UnsupportedBlock(String),

    /// A statement block is connected where a value is required.
    #[error("input `{input}` of `{kind}` expected a value, found statements")]
    ExpectedValue { kind: String, input: String },

    /// A value block is connected where statements are required.
    #[error("input `{input}` of `{kind}` expected statements, found a value")]
    ExpectedStatement { kind: String, input: String },
}

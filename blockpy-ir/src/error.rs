//! Errors raised while loading a saved program.

use thiserror::Error;

/// Result type for blockpy-ir operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The save file is not valid workspace JSON.
    #[error("failed to parse block program: {0}")]
    Parse(#[from] serde_json::Error),
}

//! Cross-cutting error types for SciQuest.
//!
//! Storage errors (`DatabaseError`) and configuration errors (`ConfigError`)
//! live in their own crates. `sq-cli` converges everything through `anyhow`.

use thiserror::Error;

/// Errors that can be raised by `sq-core`.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The operating system random source could not be read.
    #[error("Random source unavailable: {0}")]
    Random(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

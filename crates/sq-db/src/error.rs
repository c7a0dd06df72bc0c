//! Database error types for sq-db.

use thiserror::Error;

/// Errors from story persistence and the resolution service.
///
/// A missing story is not an error; lookups return `Ok(None)`.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// A SQL query failed or returned malformed data.
    #[error("Query failed: {0}")]
    Query(String),

    /// Schema migration failed.
    #[error("Migration failed: {0}")]
    Migration(String),

    /// A stored record could not be encoded or decoded.
    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The store cannot serve requests (closed, unreachable, misconfigured).
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    /// Story id generation failed.
    #[error(transparent)]
    Core(#[from] sq_core::errors::CoreError),

    /// Underlying libSQL error.
    #[error("libSQL error: {0}")]
    LibSql(#[from] libsql::Error),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

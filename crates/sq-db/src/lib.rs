//! # sq-db
//!
//! Story persistence and content resolution for SciQuest.
//!
//! - [`store::StoryStore`] is the key-value persistence seam. [`SqDb`] implements
//!   it on libSQL, [`store::memory::MemoryStore`] implements it in process.
//! - [`service::SciQuestService`] owns an injected store and exposes story
//!   generation, lookup by id, and quiz retrieval (see [`repos`]).
//! - Child profile lookups for the parent view run directly on [`SqDb`].

pub mod error;
pub mod helpers;
mod migrations;
pub mod repos;
pub mod service;
pub mod store;

#[cfg(test)]
mod test_support;

use error::DatabaseError;
use libsql::Builder;

/// libSQL database handle holding the `stories` and `user_profiles` tables.
pub struct SqDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
}

impl SqDb {
    /// Open a local database at the given path, or `":memory:"`.
    ///
    /// Runs migrations automatically on open.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;

        let sq_db = Self { db, conn };
        sq_db.run_migrations().await?;
        tracing::debug!(path, "opened story database");
        Ok(sq_db)
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }
}

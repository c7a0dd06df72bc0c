//! Service layer resolving stories and quizzes against an injected store.
//!
//! `SciQuestService` holds the story store as a trait object so tests can swap
//! in [`MemoryStore`] or a failing double. Story and quiz operations are
//! implemented as `impl SciQuestService` blocks in [`crate::repos`].

use std::sync::Arc;

use crate::SqDb;
use crate::error::DatabaseError;
use crate::store::StoryStore;
use crate::store::memory::MemoryStore;

/// Resolves story generation, story lookup, and quiz retrieval.
///
/// Every operation is a single future. A generated story is written to the
/// store before `generate_story` resolves, and store failures are returned to
/// the caller unchanged.
pub struct SciQuestService {
    store: Arc<dyn StoryStore>,
}

impl SciQuestService {
    #[must_use]
    pub fn new(store: Arc<dyn StoryStore>) -> Self {
        Self { store }
    }

    /// Service over a fresh [`MemoryStore`].
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()))
    }

    /// Service over a local libSQL database.
    ///
    /// # Arguments
    ///
    /// * `db_path` - Path to the libSQL database file, or `":memory:"` for tests.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened.
    pub async fn new_local(db_path: &str) -> Result<Self, DatabaseError> {
        let db = SqDb::open_local(db_path).await?;
        Ok(Self::new(Arc::new(db)))
    }

    /// Access the underlying story store.
    #[must_use]
    pub fn store(&self) -> &dyn StoryStore {
        self.store.as_ref()
    }
}

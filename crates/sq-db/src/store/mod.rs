//! Key-value persistence for story records.
//!
//! The service only needs `put` and `get` keyed by story id. Implementations
//! must make a completed `put` visible to every later `get` on the same store.

pub mod local;
pub mod memory;

use async_trait::async_trait;
use sq_core::entities::StoryRecord;

use crate::error::DatabaseError;

#[async_trait]
pub trait StoryStore: Send + Sync {
    /// Insert or overwrite the record stored under `story.id`.
    async fn put(&self, story: &StoryRecord) -> Result<(), DatabaseError>;

    /// Fetch a record by id. Absence is `Ok(None)`.
    async fn get(&self, id: &str) -> Result<Option<StoryRecord>, DatabaseError>;
}

//! In-process story store.

use std::collections::HashMap;

use async_trait::async_trait;
use sq_core::entities::StoryRecord;
use tokio::sync::RwLock;

use crate::error::DatabaseError;
use crate::store::StoryStore;

/// Story store backed by a map of JSON documents.
///
/// Records go through the same JSON encoding as the libSQL store so that a
/// value read back is exactly what a durable store would return.
#[derive(Debug, Default)]
pub struct MemoryStore {
    stories: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub async fn len(&self) -> usize {
        self.stories.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.stories.read().await.is_empty()
    }
}

#[async_trait]
impl StoryStore for MemoryStore {
    async fn put(&self, story: &StoryRecord) -> Result<(), DatabaseError> {
        let body = serde_json::to_string(story)?;
        self.stories.write().await.insert(story.id.clone(), body);
        Ok(())
    }

    async fn get(&self, id: &str) -> Result<Option<StoryRecord>, DatabaseError> {
        let stories = self.stories.read().await;
        stories
            .get(id)
            .map(|body| serde_json::from_str(body))
            .transpose()
            .map_err(DatabaseError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::sample_story;

    #[tokio::test]
    async fn put_then_get() {
        let store = MemoryStore::new();
        let story = sample_story("story-1");
        store.put(&story).await.unwrap();
        assert_eq!(store.get("story-1").await.unwrap(), Some(story));
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn missing_is_none() {
        let store = MemoryStore::new();
        assert!(store.is_empty().await);
        assert_eq!(store.get("nope").await.unwrap(), None);
    }

    #[tokio::test]
    async fn put_overwrites_same_id() {
        let store = MemoryStore::new();
        let mut story = sample_story("story-1");
        store.put(&story).await.unwrap();
        story.title = "Second draft".into();
        store.put(&story).await.unwrap();

        assert_eq!(store.len().await, 1);
        let fetched = store.get("story-1").await.unwrap().unwrap();
        assert_eq!(fetched.title, "Second draft");
    }
}

//! Story generation and lookup.

use chrono::Utc;

use sq_core::catalog::resolve_story_topic;
use sq_core::entities::{GenerateStoryParams, StoryRecord};
use sq_core::enums::{StoryStatus, Topic};
use sq_core::ids::{DEMO_STORY_ID, generate_story_id_at};

use crate::error::DatabaseError;
use crate::service::SciQuestService;

/// Grade band of the demonstration story.
pub const DEMO_GRADE: &str = "3-5";

/// Build the demonstration story. Panels come straight from the catalog and
/// the timestamp is the current time, so every call yields a fresh value.
#[must_use]
pub fn demo_story() -> StoryRecord {
    let topic = Topic::Photosynthesis;
    StoryRecord {
        id: DEMO_STORY_ID.to_string(),
        title: "The Photosynthesis Adventure - Grade 3".to_string(),
        topic_id: Some(topic.as_str().to_string()),
        grade: Some(DEMO_GRADE.to_string()),
        avatar_id: Some("chloro".to_string()),
        guide_id: Some("mr-chloro".to_string()),
        panels: resolve_story_topic(Some(topic.as_str()), DEMO_GRADE).panels,
        status: StoryStatus::Ready,
        created_at: Utc::now(),
    }
}

impl SciQuestService {
    /// Generate a story for `params`, persist it, and return it.
    ///
    /// The requested topic id, grade, avatar, and guide are stored as given.
    /// Panels and title come from the catalog, using the default topic when the
    /// requested one is missing or unknown.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if id generation or the store write fails.
    pub async fn generate_story(
        &self,
        params: &GenerateStoryParams,
    ) -> Result<StoryRecord, DatabaseError> {
        let now = Utc::now();
        let id = generate_story_id_at(now)?;

        let requested = params.topic_id.as_deref();
        let topic = Topic::resolve(requested);
        if requested.and_then(Topic::parse).is_none() {
            tracing::debug!(requested = ?requested, fallback = %topic, "unrecognized topic, using default");
        }

        let unit = resolve_story_topic(requested, params.grade.as_deref().unwrap_or_default());
        let story = StoryRecord {
            id,
            title: unit.title,
            topic_id: params.topic_id.clone(),
            grade: params.grade.clone(),
            avatar_id: params.avatar_id.clone(),
            guide_id: params.guide_id.clone(),
            panels: unit.panels,
            status: StoryStatus::Ready,
            created_at: now,
        };

        self.store().put(&story).await?;
        tracing::info!(story_id = %story.id, topic = %topic, panels = story.panels.len(), "story generated");

        Ok(story)
    }

    /// Look up a story by id.
    ///
    /// [`DEMO_STORY_ID`] always resolves to [`demo_story`] without touching the
    /// store. Any other id is read from the store; a miss is `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the store read fails.
    pub async fn get_story_by_id(&self, id: &str) -> Result<Option<StoryRecord>, DatabaseError> {
        if id == DEMO_STORY_ID {
            return Ok(Some(demo_story()));
        }
        let story = self.store().get(id).await?;
        tracing::debug!(story_id = id, found = story.is_some(), "story lookup");
        Ok(story)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::test_service;
    use pretty_assertions::assert_eq;
    use sq_core::catalog::story_def;

    #[tokio::test]
    async fn generate_persists_before_returning() {
        let svc = test_service();
        let story = svc
            .generate_story(&GenerateStoryParams::new("space", "6-8").with_avatar("stella"))
            .await
            .unwrap();

        assert!(story.id.starts_with("story-"));
        assert_eq!(story.title, "Journey Through the Solar System - Grade 6-8");
        assert_eq!(story.panels.len(), 8);
        assert_eq!(story.status, StoryStatus::Ready);
        assert_eq!(story.avatar_id.as_deref(), Some("stella"));
        assert_eq!(story.guide_id, None);

        let fetched = svc.store().get(&story.id).await.unwrap();
        assert_eq!(fetched, Some(story));
    }

    #[tokio::test]
    async fn unknown_topic_keeps_requested_id_but_default_panels() {
        let svc = test_service();
        let story = svc
            .generate_story(&GenerateStoryParams::new("volcanoes", "K-2"))
            .await
            .unwrap();

        assert_eq!(story.topic_id.as_deref(), Some("volcanoes"));
        assert_eq!(story.title, "The Photosynthesis Adventure - Grade K-2");
        assert_eq!(
            story.panels,
            story_def(Topic::DEFAULT).to_unit("K-2").panels
        );
    }

    #[tokio::test]
    async fn empty_params_default_everything() {
        let svc = test_service();
        let story = svc
            .generate_story(&GenerateStoryParams::default())
            .await
            .unwrap();

        assert_eq!(story.topic_id, None);
        assert_eq!(story.grade, None);
        assert_eq!(story.title, "The Photosynthesis Adventure - Grade ");
    }

    #[tokio::test]
    async fn demo_story_shape() {
        let svc = test_service();
        let demo = svc.get_story_by_id(DEMO_STORY_ID).await.unwrap().unwrap();
        assert_eq!(demo.id, DEMO_STORY_ID);
        assert_eq!(demo.topic_id.as_deref(), Some("photosynthesis"));
        assert_eq!(demo.grade.as_deref(), Some("3-5"));
        assert_eq!(demo.title, "The Photosynthesis Adventure - Grade 3");
        assert_eq!(demo.panels.len(), 8);
    }

    #[tokio::test]
    async fn unknown_id_is_none() {
        let svc = test_service();
        assert_eq!(svc.get_story_by_id("story-0-missing00").await.unwrap(), None);
    }
}

//! Quiz retrieval keyed by story.

use sq_core::catalog::resolve_quiz_topic;
use sq_core::entities::QuizResponse;
use sq_core::enums::Topic;
use sq_core::ids::DEMO_STORY_ID;

use crate::error::DatabaseError;
use crate::service::SciQuestService;

impl SciQuestService {
    /// Quiz for the topic of `story_id`.
    ///
    /// The demo story maps to photosynthesis. Other ids use the stored story's
    /// topic id; a missing story or a story without a topic uses
    /// [`Topic::DEFAULT`]. An unknown stored topic id falls back inside the
    /// catalog, so a usable quiz is always returned.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` only if the store read fails.
    pub async fn get_quiz_for_story(&self, story_id: &str) -> Result<QuizResponse, DatabaseError> {
        let topic_id = if story_id == DEMO_STORY_ID {
            Some(Topic::Photosynthesis.as_str().to_string())
        } else {
            self.store()
                .get(story_id)
                .await?
                .and_then(|story| story.topic_id)
        };
        let topic_id = topic_id.unwrap_or_else(|| Topic::DEFAULT.as_str().to_string());

        tracing::debug!(story_id, topic_id = %topic_id, "quiz resolved");
        Ok(QuizResponse::new(story_id, resolve_quiz_topic(Some(&topic_id))))
    }
}

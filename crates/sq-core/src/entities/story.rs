use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::Panel;
use crate::enums::StoryStatus;

/// A generated story. Created once, then read-only.
///
/// `topic_id` keeps the identifier exactly as requested, even when it did not
/// match a catalog topic and the panels came from the default topic.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StoryRecord {
    pub id: String,
    pub title: String,
    pub topic_id: Option<String>,
    pub grade: Option<String>,
    pub avatar_id: Option<String>,
    pub guide_id: Option<String>,
    pub panels: Vec<Panel>,
    pub status: StoryStatus,
    pub created_at: DateTime<Utc>,
}

/// Inputs to story generation. Nothing is validated; missing values pass
/// through and an absent topic falls back to the default topic.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GenerateStoryParams {
    pub topic_id: Option<String>,
    pub grade: Option<String>,
    pub avatar_id: Option<String>,
    pub guide_id: Option<String>,
}

impl GenerateStoryParams {
    #[must_use]
    pub fn new(topic_id: impl Into<String>, grade: impl Into<String>) -> Self {
        Self {
            topic_id: Some(topic_id.into()),
            grade: Some(grade.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_avatar(mut self, avatar_id: impl Into<String>) -> Self {
        self.avatar_id = Some(avatar_id.into());
        self
    }

    #[must_use]
    pub fn with_guide(mut self, guide_id: impl Into<String>) -> Self {
        self.guide_id = Some(guide_id.into());
        self
    }
}

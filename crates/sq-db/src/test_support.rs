//! Shared test utilities for sq-db unit tests.

pub(crate) mod helpers {
    use chrono::Utc;
    use sq_core::catalog::resolve_story_topic;
    use sq_core::entities::{ChildProfile, StoryRecord};
    use sq_core::enums::{AccountType, StoryStatus};

    use crate::service::SciQuestService;

    /// Service over a fresh in-memory store.
    pub fn test_service() -> SciQuestService {
        SciQuestService::in_memory()
    }

    /// A ready photosynthesis story with the given id.
    pub fn sample_story(id: &str) -> StoryRecord {
        let unit = resolve_story_topic(Some("photosynthesis"), "3-5");
        StoryRecord {
            id: id.to_string(),
            title: unit.title,
            topic_id: Some("photosynthesis".into()),
            grade: Some("3-5".into()),
            avatar_id: None,
            guide_id: None,
            panels: unit.panels,
            status: StoryStatus::Ready,
            created_at: Utc::now(),
        }
    }

    /// A bare profile; callers fill in the optional fields they care about.
    pub fn profile(id: &str, parent_id: Option<&str>, account_type: AccountType) -> ChildProfile {
        ChildProfile {
            id: id.to_string(),
            parent_id: parent_id.map(String::from),
            account_type,
            first_name: None,
            username: None,
            email: None,
            age: None,
            grade_level: None,
            avatar_url: None,
            created_at: Utc::now(),
        }
    }
}

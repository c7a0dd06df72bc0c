//! Integration tests for story generation, lookup, and quiz retrieval.
//!
//! Every behavior runs against both the libSQL store and the in-memory store.
//! A failing store double checks that persistence errors reach the caller.

use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use pretty_assertions::assert_eq;
use rstest::rstest;
use tempfile::TempDir;

use sq_core::catalog::story_def;
use sq_core::entities::{GenerateStoryParams, StoryRecord};
use sq_core::enums::Topic;
use sq_core::ids::DEMO_STORY_ID;
use sq_db::SqDb;
use sq_db::error::DatabaseError;
use sq_db::service::SciQuestService;
use sq_db::store::StoryStore;
use sq_db::store::memory::MemoryStore;

#[derive(Debug, Clone, Copy)]
enum Backend {
    Memory,
    Local,
}

async fn service(backend: Backend) -> SciQuestService {
    match backend {
        Backend::Memory => SciQuestService::in_memory(),
        Backend::Local => SciQuestService::new_local(":memory:").await.unwrap(),
    }
}

/// Store that rejects every call.
struct FailingStore;

#[async_trait]
impl StoryStore for FailingStore {
    async fn put(&self, _story: &StoryRecord) -> Result<(), DatabaseError> {
        Err(DatabaseError::Unavailable("write refused".into()))
    }

    async fn get(&self, _id: &str) -> Result<Option<StoryRecord>, DatabaseError> {
        Err(DatabaseError::Unavailable("read refused".into()))
    }
}

// ---------------------------------------------------------------------------
// Generation and lookup
// ---------------------------------------------------------------------------

#[rstest]
#[case(Backend::Memory)]
#[case(Backend::Local)]
#[tokio::test]
async fn generated_story_is_immediately_retrievable(#[case] backend: Backend) {
    let svc = service(backend).await;
    let params = GenerateStoryParams::new("space", "3-5")
        .with_avatar("stella")
        .with_guide("captain-cosmo");

    let story = svc.generate_story(&params).await.unwrap();
    let first = svc.get_story_by_id(&story.id).await.unwrap();
    let second = svc.get_story_by_id(&story.id).await.unwrap();

    assert_eq!(first.as_ref(), Some(&story));
    assert_eq!(second, first);
}

#[rstest]
#[case(Backend::Memory)]
#[case(Backend::Local)]
#[tokio::test]
async fn unknown_id_is_absent(#[case] backend: Backend) {
    let svc = service(backend).await;
    svc.generate_story(&GenerateStoryParams::new("space", "3-5"))
        .await
        .unwrap();
    assert_eq!(svc.get_story_by_id("story-123-abcdefghi").await.unwrap(), None);
    assert_eq!(svc.get_story_by_id("").await.unwrap(), None);
}

#[tokio::test]
async fn ten_thousand_rapid_generations_have_unique_ids() {
    let svc = SciQuestService::in_memory();
    let params = GenerateStoryParams::new("dinosaurs", "K-2");
    let mut ids = HashSet::new();
    for _ in 0..10_000 {
        let story = svc.generate_story(&params).await.unwrap();
        assert!(ids.insert(story.id.clone()), "Duplicate ID generated: {}", story.id);
    }
    for id in ids.iter().take(50) {
        assert!(svc.get_story_by_id(id).await.unwrap().is_some());
    }
}

#[tokio::test]
async fn concurrent_generations_all_land_in_store() {
    let store = Arc::new(MemoryStore::new());
    let svc = Arc::new(SciQuestService::new(store.clone()));

    let mut handles = Vec::new();
    for i in 0..32 {
        let svc = Arc::clone(&svc);
        handles.push(tokio::spawn(async move {
            let topic = Topic::ALL[i % Topic::ALL.len()];
            svc.generate_story(&GenerateStoryParams::new(topic.as_str(), "3-5"))
                .await
                .unwrap()
        }));
    }

    let mut ids = HashSet::new();
    for handle in handles {
        ids.insert(handle.await.unwrap().id);
    }
    assert_eq!(ids.len(), 32);
    assert_eq!(store.len().await, 32);
}

#[tokio::test]
async fn local_store_survives_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("stories.db");
    let path = path.to_str().unwrap();

    let story = {
        let svc = SciQuestService::new_local(path).await.unwrap();
        svc.generate_story(&GenerateStoryParams::new("dinosaurs", "K-2"))
            .await
            .unwrap()
    };

    let svc = SciQuestService::new_local(path).await.unwrap();
    assert_eq!(svc.get_story_by_id(&story.id).await.unwrap(), Some(story.clone()));
    let quiz = svc.get_quiz_for_story(&story.id).await.unwrap();
    assert_eq!(quiz.title, "Dinosaur Quiz");
}

// ---------------------------------------------------------------------------
// Demo story
// ---------------------------------------------------------------------------

#[rstest]
#[case(Backend::Memory)]
#[case(Backend::Local)]
#[tokio::test]
async fn demo_story_ignores_store_contents(#[case] backend: Backend) {
    let svc = service(backend).await;
    let mut planted = svc
        .generate_story(&GenerateStoryParams::new("space", "6-8"))
        .await
        .unwrap();
    planted.id = DEMO_STORY_ID.to_string();
    svc.store().put(&planted).await.unwrap();

    let demo = svc.get_story_by_id(DEMO_STORY_ID).await.unwrap().unwrap();
    assert_eq!(demo.topic_id.as_deref(), Some("photosynthesis"));
    assert_eq!(demo.grade.as_deref(), Some("3-5"));
    assert_eq!(demo.panels.len(), story_def(Topic::Photosynthesis).panels.len());

    let quiz = svc.get_quiz_for_story(DEMO_STORY_ID).await.unwrap();
    assert_eq!(quiz.title, "Photosynthesis Quiz");
}

#[tokio::test]
async fn demo_paths_never_touch_the_store() {
    let svc = SciQuestService::new(Arc::new(FailingStore));
    let demo = svc.get_story_by_id(DEMO_STORY_ID).await.unwrap().unwrap();
    assert_eq!(demo.panels.len(), 8);
    let quiz = svc.get_quiz_for_story(DEMO_STORY_ID).await.unwrap();
    assert_eq!(quiz.questions.len(), 5);
}

#[tokio::test]
async fn demo_story_is_rebuilt_each_call() {
    let svc = SciQuestService::in_memory();
    let a = svc.get_story_by_id(DEMO_STORY_ID).await.unwrap().unwrap();
    let b = svc.get_story_by_id(DEMO_STORY_ID).await.unwrap().unwrap();
    assert!(b.created_at >= a.created_at);
    assert_eq!(a.panels, b.panels);
    assert!(svc.store().get(DEMO_STORY_ID).await.unwrap().is_none());
}

// ---------------------------------------------------------------------------
// Quiz retrieval
// ---------------------------------------------------------------------------

#[rstest]
#[case("photosynthesis", "Photosynthesis Quiz", 5)]
#[case("space", "Solar System Quiz", 5)]
#[case("dinosaurs", "Dinosaur Quiz", 4)]
#[case("oceans", "Photosynthesis Quiz", 5)]
#[tokio::test]
async fn quiz_tracks_generated_topic(
    #[case] topic: &str,
    #[case] title: &str,
    #[case] questions: usize,
) {
    let svc = SciQuestService::new_local(":memory:").await.unwrap();
    let story = svc
        .generate_story(&GenerateStoryParams::new(topic, "3-5"))
        .await
        .unwrap();
    let quiz = svc.get_quiz_for_story(&story.id).await.unwrap();
    assert_eq!(quiz.story_id, story.id);
    assert_eq!(quiz.title, title);
    assert_eq!(quiz.questions.len(), questions);
}

#[rstest]
#[case(Backend::Memory)]
#[case(Backend::Local)]
#[tokio::test]
async fn quiz_for_unknown_story_is_default(#[case] backend: Backend) {
    let svc = service(backend).await;
    let quiz = svc.get_quiz_for_story("never-generated").await.unwrap();
    assert_eq!(quiz.story_id, "never-generated");
    assert_eq!(quiz.title, "Photosynthesis Quiz");
    assert_eq!(quiz.questions.len(), 5);
}

// ---------------------------------------------------------------------------
// Persistence failures
// ---------------------------------------------------------------------------

#[tokio::test]
async fn write_failure_rejects_generation() {
    let svc = SciQuestService::new(Arc::new(FailingStore));
    let result = svc
        .generate_story(&GenerateStoryParams::new("space", "3-5"))
        .await;
    assert!(matches!(result, Err(DatabaseError::Unavailable(_))));
}

#[tokio::test]
async fn read_failure_rejects_lookup_and_quiz() {
    let svc = SciQuestService::new(Arc::new(FailingStore));
    assert!(matches!(
        svc.get_story_by_id("story-1-abc").await,
        Err(DatabaseError::Unavailable(_))
    ));
    assert!(matches!(
        svc.get_quiz_for_story("story-1-abc").await,
        Err(DatabaseError::Unavailable(_))
    ));
}

#[tokio::test]
async fn shared_db_handle_serves_stories_and_profiles() {
    let db = Arc::new(SqDb::open_local(":memory:").await.unwrap());
    let svc = SciQuestService::new(db.clone());
    let story = svc
        .generate_story(&GenerateStoryParams::new("space", "3-5"))
        .await
        .unwrap();
    assert_eq!(db.get(&story.id).await.unwrap(), Some(story));
    assert!(db.list_children("nobody").await.unwrap().is_empty());
}

//! libSQL-backed story store (the `local` backend).
//!
//! Each record is one row in `stories`: the id, the requested topic id (for
//! ad-hoc queries), the JSON body, and the creation timestamp.

use async_trait::async_trait;
use sq_core::entities::StoryRecord;

use crate::SqDb;
use crate::error::DatabaseError;
use crate::helpers::format_datetime;
use crate::store::StoryStore;

#[async_trait]
impl StoryStore for SqDb {
    async fn put(&self, story: &StoryRecord) -> Result<(), DatabaseError> {
        let body = serde_json::to_string(story)?;
        self.conn()
            .execute(
                "INSERT INTO stories (id, topic_id, body, created_at) VALUES (?1, ?2, ?3, ?4)
                 ON CONFLICT(id) DO UPDATE SET
                     topic_id = excluded.topic_id,
                     body = excluded.body,
                     created_at = excluded.created_at",
                libsql::params![
                    story.id.as_str(),
                    story.topic_id.as_deref(),
                    body,
                    format_datetime(&story.created_at)
                ],
            )
            .await?;
        tracing::debug!(story_id = %story.id, "story written");
        Ok(())
    }

    async fn get(&self, id: &str) -> Result<Option<StoryRecord>, DatabaseError> {
        let mut rows = self
            .conn()
            .query("SELECT body FROM stories WHERE id = ?1", [id])
            .await?;
        let Some(row) = rows.next().await? else {
            return Ok(None);
        };
        let body = row.get::<String>(0)?;
        Ok(Some(serde_json::from_str(&body)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::sample_story;
    use pretty_assertions::assert_eq;

    async fn test_db() -> SqDb {
        SqDb::open_local(":memory:").await.unwrap()
    }

    #[tokio::test]
    async fn put_then_get_roundtrips() {
        let db = test_db().await;
        let story = sample_story("story-1");
        db.put(&story).await.unwrap();
        assert_eq!(db.get("story-1").await.unwrap(), Some(story));
    }

    #[tokio::test]
    async fn missing_is_none() {
        let db = test_db().await;
        assert_eq!(db.get("story-404").await.unwrap(), None);
    }

    #[tokio::test]
    async fn put_overwrites_same_id() {
        let db = test_db().await;
        let mut story = sample_story("story-1");
        db.put(&story).await.unwrap();
        story.topic_id = Some("dinosaurs".into());
        db.put(&story).await.unwrap();

        let mut rows = db
            .conn()
            .query("SELECT COUNT(*), topic_id FROM stories", ())
            .await
            .unwrap();
        let row = rows.next().await.unwrap().unwrap();
        assert_eq!(row.get::<i64>(0).unwrap(), 1);
        assert_eq!(row.get::<String>(1).unwrap(), "dinosaurs");
    }

    #[tokio::test]
    async fn corrupt_body_is_serialization_error() {
        let db = test_db().await;
        db.conn()
            .execute(
                "INSERT INTO stories (id, body, created_at) VALUES ('bad', 'not json', '2026-01-01T00:00:00Z')",
                (),
            )
            .await
            .unwrap();
        assert!(matches!(
            db.get("bad").await,
            Err(DatabaseError::Serialization(_))
        ));
    }
}

//! Child profile queries for the parent view.
//!
//! A parent only ever sees student profiles whose `parent_id` is their own id.
//! Anything else reads as not found.

use sq_core::entities::ChildProfile;
use sq_core::enums::AccountType;

use crate::SqDb;
use crate::error::DatabaseError;
use crate::helpers::{format_datetime, get_opt_string, parse_datetime, parse_enum};

const PROFILE_COLUMNS: &str = "id, parent_id, account_type, first_name, username, email, age, grade_level, avatar_url, created_at";

fn row_to_profile(row: &libsql::Row) -> Result<ChildProfile, DatabaseError> {
    let age = row
        .get::<Option<i64>>(6)?
        .map(u32::try_from)
        .transpose()
        .map_err(|e| DatabaseError::Query(format!("Invalid age: {e}")))?;
    Ok(ChildProfile {
        id: row.get::<String>(0)?,
        parent_id: get_opt_string(row, 1)?,
        account_type: parse_enum(&row.get::<String>(2)?)?,
        first_name: get_opt_string(row, 3)?,
        username: get_opt_string(row, 4)?,
        email: get_opt_string(row, 5)?,
        age,
        grade_level: get_opt_string(row, 7)?,
        avatar_url: get_opt_string(row, 8)?,
        created_at: parse_datetime(&row.get::<String>(9)?)?,
    })
}

impl SqDb {
    /// Insert or replace a profile.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the write fails.
    pub async fn upsert_profile(&self, profile: &ChildProfile) -> Result<(), DatabaseError> {
        self.conn()
            .execute(
                "INSERT INTO user_profiles (id, parent_id, account_type, first_name, username, email, age, grade_level, avatar_url, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)
                 ON CONFLICT(id) DO UPDATE SET
                     parent_id = excluded.parent_id,
                     account_type = excluded.account_type,
                     first_name = excluded.first_name,
                     username = excluded.username,
                     email = excluded.email,
                     age = excluded.age,
                     grade_level = excluded.grade_level,
                     avatar_url = excluded.avatar_url,
                     created_at = excluded.created_at",
                libsql::params![
                    profile.id.as_str(),
                    profile.parent_id.as_deref(),
                    profile.account_type.as_str(),
                    profile.first_name.as_deref(),
                    profile.username.as_deref(),
                    profile.email.as_deref(),
                    profile.age.map(i64::from),
                    profile.grade_level.as_deref(),
                    profile.avatar_url.as_deref(),
                    format_datetime(&profile.created_at)
                ],
            )
            .await?;
        Ok(())
    }

    /// Student profiles linked to `parent_id`, newest first.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails or a row is malformed.
    pub async fn list_children(&self, parent_id: &str) -> Result<Vec<ChildProfile>, DatabaseError> {
        let sql = format!(
            "SELECT {PROFILE_COLUMNS} FROM user_profiles
             WHERE parent_id = ?1 AND account_type = ?2
             ORDER BY created_at DESC"
        );
        let mut rows = self
            .conn()
            .query(&sql, [parent_id, AccountType::Student.as_str()])
            .await?;
        let mut children = Vec::new();
        while let Some(row) = rows.next().await? {
            children.push(row_to_profile(&row)?);
        }
        tracing::debug!(parent_id, count = children.len(), "listed children");
        Ok(children)
    }

    /// A single student profile of `parent_id`.
    ///
    /// Returns `Ok(None)` when the id does not exist, belongs to another parent,
    /// or is not a student account.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails or the row is malformed.
    pub async fn get_child(
        &self,
        parent_id: &str,
        child_id: &str,
    ) -> Result<Option<ChildProfile>, DatabaseError> {
        let sql = format!(
            "SELECT {PROFILE_COLUMNS} FROM user_profiles
             WHERE id = ?1 AND parent_id = ?2 AND account_type = ?3"
        );
        let mut rows = self
            .conn()
            .query(&sql, [child_id, parent_id, AccountType::Student.as_str()])
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row_to_profile(&row)?)),
            None => Ok(None),
        }
    }
}

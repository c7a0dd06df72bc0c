use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::avatar::default_avatar_emoji;
use crate::enums::AccountType;

/// A user profile as shown to a parent. Only student profiles linked to a
/// parent are ever listed.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ChildProfile {
    pub id: String,
    pub parent_id: Option<String>,
    pub account_type: AccountType,
    pub first_name: Option<String>,
    pub username: Option<String>,
    pub email: Option<String>,
    pub age: Option<u32>,
    pub grade_level: Option<String>,
    pub avatar_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl ChildProfile {
    /// First name, then username, then `"Student"`.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.first_name
            .as_deref()
            .filter(|s| !s.is_empty())
            .or_else(|| self.username.as_deref().filter(|s| !s.is_empty()))
            .unwrap_or("Student")
    }

    /// Glyph shown when the profile has no avatar image.
    #[must_use]
    pub fn fallback_avatar(&self) -> &'static str {
        let name = self
            .first_name
            .as_deref()
            .filter(|s| !s.is_empty())
            .or(self.username.as_deref());
        default_avatar_emoji(name)
    }
}

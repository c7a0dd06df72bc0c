//! Topic, story status, and account type enums for SciQuest.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Topic
// ---------------------------------------------------------------------------

/// A science topic with one story unit and one quiz unit in the catalog.
///
/// The set is closed. Anything that does not parse to a variant resolves to
/// [`Topic::DEFAULT`] through [`Topic::resolve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Topic {
    Photosynthesis,
    Space,
    Dinosaurs,
}

impl Topic {
    /// Fallback topic for missing or unrecognized identifiers.
    pub const DEFAULT: Self = Self::Photosynthesis;

    /// Every topic, in catalog order.
    pub const ALL: [Self; 3] = [Self::Photosynthesis, Self::Space, Self::Dinosaurs];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Photosynthesis => "photosynthesis",
            Self::Space => "space",
            Self::Dinosaurs => "dinosaurs",
        }
    }

    /// Parse an exact topic identifier. Matching is case-sensitive.
    #[must_use]
    pub fn parse(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|topic| topic.as_str() == id)
    }

    /// Resolve an optional identifier to a topic, defaulting on anything unknown.
    #[must_use]
    pub fn resolve(id: Option<&str>) -> Self {
        id.and_then(Self::parse).unwrap_or(Self::DEFAULT)
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// StoryStatus
// ---------------------------------------------------------------------------

/// Lifecycle status of a story record.
///
/// Generation completes before a record is returned, so `ready` is the only
/// state a record is ever observed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum StoryStatus {
    Ready,
}

impl StoryStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ready => "ready",
        }
    }
}

impl fmt::Display for StoryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// AccountType
// ---------------------------------------------------------------------------

/// Kind of user profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum AccountType {
    Student,
    Parent,
}

impl AccountType {
    /// Return the string representation used in SQL storage.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Parent => "parent",
        }
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

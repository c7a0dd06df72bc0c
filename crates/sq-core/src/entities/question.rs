use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A multiple-choice question. `correct_index` points into `options`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: String,
    pub question: String,
    pub options: Vec<String>,
    pub correct_index: usize,
}

impl Question {
    /// Whether `choice` is the correct option.
    #[must_use]
    pub fn is_correct(&self, choice: usize) -> bool {
        choice == self.correct_index
    }

    /// The text of the correct option.
    #[must_use]
    pub fn correct_option(&self) -> Option<&str> {
        self.options.get(self.correct_index).map(String::as_str)
    }
}

/// A topic's quiz as resolved from the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct QuizUnit {
    pub title: String,
    pub questions: Vec<Question>,
}

/// Quiz handed to the caller for a given story.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct QuizResponse {
    pub story_id: String,
    pub title: String,
    pub questions: Vec<Question>,
}

impl QuizResponse {
    #[must_use]
    pub fn new(story_id: impl Into<String>, unit: QuizUnit) -> Self {
        Self {
            story_id: story_id.into(),
            title: unit.title,
            questions: unit.questions,
        }
    }
}

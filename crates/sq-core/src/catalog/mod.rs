//! Static content catalog: one story unit and one quiz unit per [`Topic`].
//!
//! Lookups are total. [`story_def`] and [`quiz_def`] match exhaustively over the
//! closed topic enum, and the `resolve_*` functions map any unknown or missing
//! identifier to [`Topic::DEFAULT`] before looking anything up.

mod quizzes;
mod stories;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{Panel, Question, QuizUnit, StoryUnit};
use crate::enums::Topic;

/// Compile-time question definition. Every question has exactly four options.
#[derive(Debug)]
pub struct QuestionDef {
    pub id: &'static str,
    pub question: &'static str,
    pub options: [&'static str; 4],
    pub correct_index: usize,
}

#[derive(Debug)]
pub struct QuizDef {
    pub title: &'static str,
    pub questions: &'static [QuestionDef],
}

/// Compile-time panel definition.
#[derive(Debug)]
pub struct PanelDef {
    pub panel_number: u32,
    pub image_url: &'static str,
    pub caption: &'static str,
}

#[derive(Debug)]
pub struct StoryDef {
    pub title: &'static str,
    pub emoji: &'static str,
    pub panels: &'static [PanelDef],
}

impl From<&QuestionDef> for Question {
    fn from(def: &QuestionDef) -> Self {
        Self {
            id: def.id.to_string(),
            question: def.question.to_string(),
            options: def.options.iter().map(ToString::to_string).collect(),
            correct_index: def.correct_index,
        }
    }
}

impl From<&PanelDef> for Panel {
    fn from(def: &PanelDef) -> Self {
        Self {
            panel_number: def.panel_number,
            image_url: def.image_url.to_string(),
            caption: def.caption.to_string(),
        }
    }
}

impl QuizDef {
    #[must_use]
    pub fn to_unit(&self) -> QuizUnit {
        QuizUnit {
            title: self.title.to_string(),
            questions: self.questions.iter().map(Question::from).collect(),
        }
    }
}

impl StoryDef {
    /// Build a story unit whose title carries the grade band.
    #[must_use]
    pub fn to_unit(&self, grade: &str) -> StoryUnit {
        StoryUnit {
            title: story_title(self.title, grade),
            emoji: self.emoji.to_string(),
            panels: self.panels.iter().map(Panel::from).collect(),
        }
    }
}

/// Render a story title as `"{base} - Grade {grade}"`. The grade is inserted
/// verbatim.
#[must_use]
pub fn story_title(base: &str, grade: &str) -> String {
    format!("{base} - Grade {grade}")
}

#[must_use]
pub fn story_def(topic: Topic) -> &'static StoryDef {
    match topic {
        Topic::Photosynthesis => &stories::PHOTOSYNTHESIS,
        Topic::Space => &stories::SPACE,
        Topic::Dinosaurs => &stories::DINOSAURS,
    }
}

#[must_use]
pub fn quiz_def(topic: Topic) -> &'static QuizDef {
    match topic {
        Topic::Photosynthesis => &quizzes::PHOTOSYNTHESIS,
        Topic::Space => &quizzes::SPACE,
        Topic::Dinosaurs => &quizzes::DINOSAURS,
    }
}

/// Quiz unit for `topic_id`, or the default topic's quiz when unrecognized.
#[must_use]
pub fn resolve_quiz_topic(topic_id: Option<&str>) -> QuizUnit {
    quiz_def(Topic::resolve(topic_id)).to_unit()
}

/// Story unit for `topic_id`, or the default topic's story when unrecognized.
/// The title is rendered with `grade`.
#[must_use]
pub fn resolve_story_topic(topic_id: Option<&str>, grade: &str) -> StoryUnit {
    story_def(Topic::resolve(topic_id)).to_unit(grade)
}

/// One row of the topic listing.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TopicSummary {
    pub topic: Topic,
    pub story_title: String,
    pub emoji: String,
    pub quiz_title: String,
    pub panel_count: usize,
    pub question_count: usize,
    pub is_default: bool,
}

/// Summaries of every topic in catalog order.
#[must_use]
pub fn topics() -> Vec<TopicSummary> {
    Topic::ALL
        .into_iter()
        .map(|topic| {
            let story = story_def(topic);
            let quiz = quiz_def(topic);
            TopicSummary {
                topic,
                story_title: story.title.to_string(),
                emoji: story.emoji.to_string(),
                quiz_title: quiz.title.to_string(),
                panel_count: story.panels.len(),
                question_count: quiz.questions.len(),
                is_default: topic == Topic::DEFAULT,
            }
        })
        .collect()
}

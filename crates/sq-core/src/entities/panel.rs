use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One illustrated step of a story. Panel numbers start at 1.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Panel {
    pub panel_number: u32,
    pub image_url: String,
    pub caption: String,
}

/// A topic's narrative content as resolved from the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct StoryUnit {
    pub title: String,
    pub emoji: String,
    pub panels: Vec<Panel>,
}

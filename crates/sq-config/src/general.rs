//! General application configuration.

use serde::{Deserialize, Serialize};

fn default_grade() -> String {
    "3-5".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Grade band used when a generate request does not name one.
    #[serde(default = "default_grade")]
    pub default_grade: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_grade: default_grade(),
        }
    }
}

//! Story store configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

fn default_path() -> String {
    ".sciquest/stories.db".to_string()
}

/// Which story store implementation to open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StoreBackend {
    /// Process-local map; nothing survives exit.
    Memory,
    /// libSQL database file at [`StoreConfig::path`].
    #[default]
    Local,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StoreConfig {
    #[serde(default)]
    pub backend: StoreBackend,

    /// Database file for the `local` backend. `:memory:` is accepted.
    #[serde(default = "default_path")]
    pub path: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: StoreBackend::default(),
            path: default_path(),
        }
    }
}

impl StoreConfig {
    /// Check that the selected backend has what it needs.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if the `local` backend has an empty path.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.backend == StoreBackend::Local && self.path.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "store.path".into(),
                reason: "local backend requires a database path".into(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_path_rejected_for_local() {
        let config = StoreConfig {
            backend: StoreBackend::Local,
            path: "  ".into(),
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { .. })
        ));
    }

    #[test]
    fn memory_backend_ignores_path() {
        let config = StoreConfig {
            backend: StoreBackend::Memory,
            path: String::new(),
        };
        assert!(config.validate().is_ok());
    }
}

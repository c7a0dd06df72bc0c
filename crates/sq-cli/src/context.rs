use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use sq_config::{SciQuestConfig, StoreBackend};
use sq_db::SqDb;
use sq_db::service::SciQuestService;

/// Opened stores and services shared by all command handlers.
pub struct AppContext {
    pub config: SciQuestConfig,
    pub service: SciQuestService,
    /// libSQL handle for profile queries; `None` on the memory backend.
    pub db: Option<Arc<SqDb>>,
}

impl AppContext {
    /// Open the configured story store. `store_override` replaces `store.path`
    /// and forces the local backend.
    pub async fn init(
        mut config: SciQuestConfig,
        store_override: Option<&str>,
    ) -> anyhow::Result<Self> {
        if let Some(path) = store_override {
            config.store.backend = StoreBackend::Local;
            config.store.path = path.to_string();
        }

        match config.store.backend {
            StoreBackend::Memory => {
                tracing::debug!("using in-memory story store");
                Ok(Self {
                    config,
                    service: SciQuestService::in_memory(),
                    db: None,
                })
            }
            StoreBackend::Local => {
                let path = config.store.path.clone();
                ensure_parent_dir(&path)?;
                let db = Arc::new(
                    SqDb::open_local(&path)
                        .await
                        .with_context(|| format!("failed to open story database at {path}"))?,
                );
                let service = SciQuestService::new(db.clone());
                Ok(Self {
                    config,
                    service,
                    db: Some(db),
                })
            }
        }
    }

    /// The libSQL handle, or an error explaining that profiles need it.
    pub fn profile_db(&self) -> anyhow::Result<&SqDb> {
        self.db
            .as_deref()
            .context("child profiles require the local store backend (set store.backend = \"local\")")
    }
}

fn ensure_parent_dir(path: &str) -> anyhow::Result<()> {
    if path == ":memory:" {
        return Ok(());
    }
    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
    }
    Ok(())
}

use anyhow::Context;
use wordbook_config::Config;
use wordbook_core::WordStore;

/// Everything the control loop owns. Only the event loop touches it, so
/// there is no locking.
pub struct AppState {
    pub config: Config,
    pub store: WordStore,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let store = WordStore::open(&config.store.path).with_context(|| {
            format!("Failed to open word book {}", config.store.path.display())
        })?;

        Ok(Self { config, store })
    }
}

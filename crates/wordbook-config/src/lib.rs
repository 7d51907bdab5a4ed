use std::env;

use serde::{Deserialize, Serialize};

use self::lookup::LookupConfig;
use self::review::ReviewConfig;
use self::store::StoreConfig;

pub mod lookup;
pub mod review;
pub mod store;

fn default_help_url() -> String {
    "https://github.com/Janson20/----/wiki".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub store: StoreConfig,
    pub lookup: LookupConfig,
    pub review: ReviewConfig,
    /// Shown by the `help` command
    #[serde(default = "default_help_url")]
    pub help_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store: StoreConfig::default(),
            lookup: LookupConfig::default(),
            review: ReviewConfig::default(),
            help_url: default_help_url(),
        }
    }
}

impl Config {
    /// Overlay `WORDBOOK_*` environment variables. Unparsable values are
    /// ignored with a warning.
    pub fn apply_env(&mut self) {
        if let Ok(path) = env::var("WORDBOOK_FILE") {
            self.store.path = path.into();
        }

        if let Ok(url) = env::var("WORDBOOK_LOOKUP_URL") {
            self.lookup.endpoint = url;
        }

        if let Some(secs) = parse_var("WORDBOOK_LOOKUP_TIMEOUT") {
            self.lookup.timeout_seconds = secs;
        }

        if let Some(ms) = parse_var("WORDBOOK_REVIEW_PACE_MS") {
            self.review.pace_ms = ms;
        }
    }
}

fn parse_var(key: &str) -> Option<u64> {
    let raw = env::var(key).ok()?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!("ignoring {key}={raw:?}: not a number");
            None
        }
    }
}

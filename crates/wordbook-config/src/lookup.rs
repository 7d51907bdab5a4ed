use std::time::Duration;

use serde::{Deserialize, Serialize};
use wordbook_types::Numbering;

fn default_enabled() -> bool {
    true
}

fn default_endpoint() -> String {
    "https://api.dictionaryapi.dev/api/v2/entries/en/{word}".to_string()
}

fn default_timeout_seconds() -> u64 {
    10
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LookupConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// URL template, `{word}` is replaced by the queried word
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
    #[serde(default)]
    pub numbering: Numbering,
}

impl LookupConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            endpoint: default_endpoint(),
            timeout_seconds: default_timeout_seconds(),
            numbering: Numbering::default(),
        }
    }
}

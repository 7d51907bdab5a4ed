use std::time::Duration;

use serde::{Deserialize, Serialize};

fn default_pace_ms() -> u64 {
    800
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReviewConfig {
    /// Pause after a verdict before the next prompt
    #[serde(default = "default_pace_ms")]
    pub pace_ms: u64,
}

impl ReviewConfig {
    pub fn pace(&self) -> Duration {
        Duration::from_millis(self.pace_ms)
    }
}

impl Default for ReviewConfig {
    fn default() -> Self {
        Self {
            pace_ms: default_pace_ms(),
        }
    }
}

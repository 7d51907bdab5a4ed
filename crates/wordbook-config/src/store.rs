use std::path::PathBuf;

use serde::{Deserialize, Serialize};

const FILE_NAME: &str = "word_book.json";

/// `<data_dir>/wordbook/word_book.json`, or the working directory when the
/// platform has no data directory
fn default_path() -> PathBuf {
    match dirs::data_dir() {
        Some(dir) => dir.join("wordbook").join(FILE_NAME),
        None => PathBuf::from(FILE_NAME),
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Backing JSON file
    #[serde(default = "default_path")]
    pub path: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
        }
    }
}

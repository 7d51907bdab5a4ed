mod client;
mod format;

pub use client::FreeDictionaryClient;
pub use format::format_definitions;

use serde::Deserialize;
use wordbook_types::{LookupOutcome, Numbering};

/// Online dictionary provider interface
#[async_trait::async_trait]
pub trait DictionaryService: Send + Sync {
    /// Fetch every entry the service has for `word`
    async fn define(&self, word: &str) -> Result<Vec<WordDefinition>, LookupError>;

    /// Provider metadata
    fn metadata(&self) -> ProviderMetadata;
}

#[derive(Debug, Clone)]
pub struct ProviderMetadata {
    pub name: String,
}

/// One entry of the service's response body.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WordDefinition {
    #[serde(default)]
    pub word: String,
    #[serde(default)]
    pub meanings: Vec<MeaningGroup>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MeaningGroup {
    #[serde(default)]
    pub definitions: Vec<DefinitionText>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DefinitionText {
    pub definition: String,
}

#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("no definitions found for '{word}'")]
    NotFound { word: String },

    #[error("nothing to look up")]
    InvalidWord,

    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(String),

    #[error("request timed out")]
    Timeout,

    #[error("network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("rate limit exceeded")]
    RateLimitExceeded,

    #[error("API error: {0}")]
    ApiError(String),
}

/// Look `word` up and render the result for display.
///
/// Never fails: every error becomes [`LookupOutcome::NotFound`] or a
/// [`LookupOutcome::Failed`] carrying a readable reason.
pub async fn lookup_text(
    service: &dyn DictionaryService,
    word: &str,
    numbering: Numbering,
) -> LookupOutcome {
    match service.define(word).await {
        Ok(entries) => {
            let text = format_definitions(&entries, numbering);
            if text.is_empty() {
                LookupOutcome::NotFound
            } else {
                LookupOutcome::Found(text)
            }
        }
        Err(LookupError::NotFound { .. }) => LookupOutcome::NotFound,
        Err(e) => {
            tracing::warn!("{} lookup for '{word}' failed: {e}", service.metadata().name);
            LookupOutcome::Failed(e.to_string())
        }
    }
}

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;

use crate::{DictionaryService, LookupError, ProviderMetadata, WordDefinition};

const PLACEHOLDER: &str = "{word}";

/// Client for dictionaryapi.dev-shaped services: `GET <endpoint>` returns a
/// JSON list of entries, each with `meanings[].definitions[].definition`.
#[derive(Clone)]
pub struct FreeDictionaryClient {
    client: reqwest::Client,
    endpoint: String,
}

impl FreeDictionaryClient {
    /// `endpoint` must contain a `{word}` placeholder. `timeout` bounds the
    /// whole request.
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, LookupError> {
        let endpoint = endpoint.into();
        if !endpoint.contains(PLACEHOLDER) {
            return Err(LookupError::InvalidEndpoint(format!(
                "'{endpoint}' has no {PLACEHOLDER} placeholder"
            )));
        }

        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client, endpoint })
    }

    pub fn url_for(&self, word: &str) -> String {
        self.endpoint.replace(PLACEHOLDER, &urlencoding::encode(word))
    }
}

#[async_trait]
impl DictionaryService for FreeDictionaryClient {
    async fn define(&self, word: &str) -> Result<Vec<WordDefinition>, LookupError> {
        let word = word.trim();
        if word.is_empty() {
            return Err(LookupError::InvalidWord);
        }

        let url = self.url_for(word);
        tracing::debug!("GET {url}");

        let response = self.client.get(&url).send().await.map_err(|e| {
            if e.is_timeout() {
                LookupError::Timeout
            } else {
                LookupError::NetworkError(e)
            }
        })?;

        match response.status() {
            StatusCode::NOT_FOUND => {
                return Err(LookupError::NotFound {
                    word: word.to_string(),
                });
            }
            StatusCode::TOO_MANY_REQUESTS => return Err(LookupError::RateLimitExceeded),
            status if !status.is_success() => {
                return Err(LookupError::ApiError(format!("HTTP {status}")));
            }
            _ => {}
        }

        let entries: Vec<WordDefinition> = response.json().await.map_err(|e| {
            if e.is_timeout() {
                LookupError::Timeout
            } else {
                LookupError::ApiError(format!("Failed to parse response: {e}"))
            }
        })?;

        tracing::debug!("'{word}': {} entr(ies)", entries.len());
        Ok(entries)
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "Free Dictionary API".to_string(),
        }
    }
}

use std::io;
use std::path::PathBuf;

use crate::entry::Field;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{field} must not be empty")]
    EmptyField { field: Field },

    #[error("'{word}' is already in the word book")]
    Duplicate { word: String },

    #[error("failed to access {}: {source}", path.display())]
    Persistence {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to encode word book: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("the word book is empty, nothing to review")]
    EmptySession,

    #[error("review session has already been started")]
    SessionStarted,

    #[error("review session is not running")]
    SessionNotRunning,
}

impl Error {
    pub(crate) fn persistence(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::Persistence {
            path: path.into(),
            source,
        }
    }

    /// Validation, duplicate and empty-session errors leave all state
    /// untouched. Persistence errors may leave memory and disk out of step
    /// until the next successful save or reload.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Error::Persistence { .. } | Error::Encode(_))
    }
}

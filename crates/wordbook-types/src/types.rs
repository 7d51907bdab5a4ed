use std::fmt;

use serde::{Deserialize, Serialize};

/// Events delivered to the controller's event loop.
///
/// Every producer (stdin reader, background lookups) talks to the loop through
/// these; none of them touch the word store directly.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// One line typed by the user
    Input(String),
    /// Standard input reached end-of-file
    InputClosed,
    /// A background online lookup completed
    LookupFinished { word: String, outcome: LookupOutcome },
    /// Ctrl+C or `quit`
    Shutdown,
}

/// Result of an online lookup, already rendered for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    Found(String),
    NotFound,
    Failed(String),
}

impl fmt::Display for LookupOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupOutcome::Found(text) => f.write_str(text),
            LookupOutcome::NotFound => f.write_str("No definitions found."),
            LookupOutcome::Failed(reason) => write!(f, "Lookup failed: {reason}"),
        }
    }
}

/// Which side of an entry is shown as the review prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Show the word, expect the meaning
    WordToMeaning,
    /// Show the meaning, expect the word
    MeaningToWord,
}

/// How definitions are numbered in a formatted lookup result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Numbering {
    /// Restart at 1 for every meaning group
    #[default]
    PerMeaning,
    /// One running sequence across all groups
    Continuous,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_outcome_display() {
        assert_eq!(LookupOutcome::Found("1. a fruit".into()).to_string(), "1. a fruit");
        assert_eq!(LookupOutcome::NotFound.to_string(), "No definitions found.");
        assert_eq!(
            LookupOutcome::Failed("timed out".into()).to_string(),
            "Lookup failed: timed out"
        );
    }
}

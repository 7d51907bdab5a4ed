use std::fmt;

use serde::Serialize;
use unicode_normalization::UnicodeNormalization;

use crate::error::{Error, Result};

/// Trimmed, NFC-composed, lower-cased form used as the store's key.
pub fn normalize_word(raw: &str) -> String {
    raw.trim().nfc().collect::<String>().to_lowercase()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Word,
    Meaning,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Word => f.write_str("word"),
            Field::Meaning => f.write_str("meaning"),
        }
    }
}

/// One word/meaning pair.
///
/// The word is normalized here and nowhere else; the meaning keeps its case
/// but loses surrounding whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    word: String,
    meaning: String,
}

impl Entry {
    pub fn new(word: &str, meaning: &str) -> Result<Self> {
        let word = normalize_word(word);
        if word.is_empty() {
            return Err(Error::EmptyField { field: Field::Word });
        }

        let meaning = meaning.trim();
        if meaning.is_empty() {
            return Err(Error::EmptyField {
                field: Field::Meaning,
            });
        }

        Ok(Self {
            word,
            meaning: meaning.to_string(),
        })
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn meaning(&self) -> &str {
        &self.meaning
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.word, self.meaning)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_is_folded_meaning_keeps_case() {
        let entry = Entry::new("  Hello ", "  A Greeting\t").unwrap();
        assert_eq!(entry.word(), "hello");
        assert_eq!(entry.meaning(), "A Greeting");
    }

    #[test]
    fn blank_fields_are_rejected() {
        assert!(matches!(
            Entry::new("   ", "x"),
            Err(Error::EmptyField { field: Field::Word })
        ));
        assert!(matches!(
            Entry::new("apple", "\n"),
            Err(Error::EmptyField {
                field: Field::Meaning
            })
        ));
    }

    #[test]
    fn composed_and_decomposed_forms_normalize_equal() {
        // "Café" with a precomposed é and with e + combining acute
        assert_eq!(normalize_word("Caf\u{e9}"), normalize_word("Cafe\u{301}"));
    }

    #[test]
    fn non_latin_words_survive() {
        let entry = Entry::new("苹果", "apple").unwrap();
        assert_eq!(entry.word(), "苹果");
        assert_eq!(entry.to_string(), "苹果 - apple");
    }
}

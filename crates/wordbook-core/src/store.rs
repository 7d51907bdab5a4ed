use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_json::ser::PrettyFormatter;

use crate::entry::{Entry, normalize_word};
use crate::error::{Error, Result};

/// Record shape in the backing file. Each array element is decoded on its
/// own, so a single bad record is skipped instead of discarding the file.
#[derive(Deserialize)]
struct RawEntry {
    #[serde(default)]
    word: String,
    #[serde(default)]
    meaning: String,
}

/// Sorted, duplicate-free collection of entries persisted as a JSON array.
///
/// Every successful mutation rewrites the whole file before returning.
#[derive(Debug)]
pub struct WordStore {
    path: PathBuf,
    entries: Vec<Entry>,
}

impl WordStore {
    /// Open the store backed by `path`, loading whatever is there.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let mut store = Self {
            path: path.into(),
            entries: Vec::new(),
        };
        store.load()?;
        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Replace the in-memory entries with the backing file's content.
    ///
    /// A missing or malformed file yields an empty store. Other read
    /// failures (permissions, a directory in the way) are reported.
    pub fn load(&mut self) -> Result<()> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::info!("no word book at {}, starting empty", self.path.display());
                self.entries.clear();
                return Ok(());
            }
            Err(e) if e.kind() == io::ErrorKind::InvalidData => {
                tracing::warn!("{} is not valid UTF-8, starting empty", self.path.display());
                self.entries.clear();
                return Ok(());
            }
            Err(e) => return Err(Error::persistence(&self.path, e)),
        };

        let raw: Vec<Value> = match serde_json::from_str(&data) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!("malformed word book {}: {e}", self.path.display());
                self.entries.clear();
                return Ok(());
            }
        };

        let mut entries: Vec<Entry> = Vec::with_capacity(raw.len());
        for (index, value) in raw.into_iter().enumerate() {
            let record = match RawEntry::deserialize(value) {
                Ok(record) => record,
                Err(e) => {
                    tracing::warn!("skipping record #{index}: {e}");
                    continue;
                }
            };
            match Entry::new(&record.word, &record.meaning) {
                Ok(entry) => entries.push(entry),
                Err(e) => tracing::warn!("skipping record {:?}: {e}", record.word),
            }
        }

        // Stable sort keeps the first of any duplicated words in front.
        entries.sort_by(|a, b| a.word().cmp(b.word()));
        let before = entries.len();
        entries.dedup_by(|later, first| later.word() == first.word());
        if entries.len() != before {
            tracing::warn!(
                "dropped {} duplicate record(s) from {}",
                before - entries.len(),
                self.path.display()
            );
        }

        tracing::info!(
            "loaded {} word(s) from {}",
            entries.len(),
            self.path.display()
        );
        self.entries = entries;
        Ok(())
    }

    /// Insert a new entry at its sorted position and persist.
    pub fn add(&mut self, word: &str, meaning: &str) -> Result<&Entry> {
        let entry = Entry::new(word, meaning)?;

        let index = match self.position(entry.word()) {
            Ok(_) => {
                return Err(Error::Duplicate {
                    word: entry.word().to_string(),
                });
            }
            Err(index) => index,
        };

        tracing::debug!("inserting '{}' at {index}", entry.word());
        self.entries.insert(index, entry);
        self.save()?;

        tracing::info!("added '{}'", self.entries[index].word());
        Ok(&self.entries[index])
    }

    /// Remove the entry for `word`. Returns whether anything was removed;
    /// the file is only rewritten when it was.
    pub fn remove(&mut self, word: &str) -> Result<bool> {
        let key = normalize_word(word);
        let before = self.entries.len();
        self.entries.retain(|entry| entry.word() != key);

        if self.entries.len() == before {
            tracing::debug!("remove: '{key}' not present");
            return Ok(false);
        }

        self.save()?;
        tracing::info!("removed '{key}'");
        Ok(true)
    }

    pub fn find(&self, word: &str) -> Option<&Entry> {
        let key = normalize_word(word);
        self.position(&key).ok().map(|index| &self.entries[index])
    }

    /// All (word, meaning) pairs in word order.
    pub fn list_all(&self) -> Vec<(&str, &str)> {
        self.entries
            .iter()
            .map(|entry| (entry.word(), entry.meaning()))
            .collect()
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Rewrite the backing file with the current entries.
    ///
    /// The JSON is written to a sibling temporary file which then replaces
    /// the real one, so a crash mid-write never truncates the word book.
    pub fn save(&self) -> Result<()> {
        let mut buf = Vec::new();
        let mut serializer =
            serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
        self.entries.serialize(&mut serializer)?;
        buf.push(b'\n');

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| Error::persistence(parent, e))?;
        }

        let tmp = temp_path(&self.path);
        fs::write(&tmp, &buf).map_err(|e| Error::persistence(&tmp, e))?;
        if let Err(e) = fs::rename(&tmp, &self.path) {
            let _ = fs::remove_file(&tmp);
            return Err(Error::persistence(&self.path, e));
        }

        tracing::debug!(
            "saved {} word(s) to {}",
            self.entries.len(),
            self.path.display()
        );
        Ok(())
    }

    fn position(&self, key: &str) -> std::result::Result<usize, usize> {
        self.entries.binary_search_by(|entry| entry.word().cmp(key))
    }
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("word_book.json"));
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> WordStore {
        WordStore::open(dir.path().join("word_book.json")).unwrap()
    }

    #[test]
    fn missing_file_is_empty_store() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        assert!(store.is_empty());
        assert!(!store.path().exists());
    }

    #[test]
    fn malformed_file_is_empty_store() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("word_book.json");
        fs::write(&path, "{ not json").unwrap();

        let store = WordStore::open(&path).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn legacy_file_is_sorted_and_deduplicated() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("word_book.json");
        fs::write(
            &path,
            r#"[
                {"word": "Zebra", "meaning": "斑马"},
                {"word": "apple", "meaning": "苹果"},
                {"word": "APPLE", "meaning": "later duplicate"},
                {"word": "  ", "meaning": "no word"},
                {"meaning": "missing word"}
            ]"#,
        )
        .unwrap();

        let store = WordStore::open(&path).unwrap();
        assert_eq!(store.list_all(), vec![("apple", "苹果"), ("zebra", "斑马")]);
    }

    #[test]
    fn mistyped_record_does_not_cost_the_rest() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("word_book.json");
        fs::write(
            &path,
            r#"[
                {"word": "apple", "meaning": "苹果"},
                {"word": "pear", "meaning": null},
                {"word": 42, "meaning": "number"},
                "stray string"
            ]"#,
        )
        .unwrap();

        let mut store = WordStore::open(&path).unwrap();
        assert_eq!(store.list_all(), vec![("apple", "苹果")]);

        store.add("kiwi", "猕猴桃").unwrap();
        let reopened = WordStore::open(&path).unwrap();
        assert_eq!(
            reopened.list_all(),
            vec![("apple", "苹果"), ("kiwi", "猕猴桃")]
        );
    }

    #[test]
    fn non_array_file_is_empty_store() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("word_book.json");
        fs::write(&path, r#"{"word": "apple", "meaning": "苹果"}"#).unwrap();

        let store = WordStore::open(&path).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn save_uses_four_space_indent_and_raw_unicode() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);
        store.add("apple", "苹果").unwrap();

        let written = fs::read_to_string(store.path()).unwrap();
        assert_eq!(
            written,
            "[\n    {\n        \"word\": \"apple\",\n        \"meaning\": \"苹果\"\n    }\n]\n"
        );
        assert!(!temp_path(store.path()).exists());
    }

    #[test]
    fn save_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("deeper").join("book.json");
        let mut store = WordStore::open(&path).unwrap();
        store.add("kiwi", "a fruit").unwrap();
        assert!(path.exists());
    }

    #[test]
    fn rejected_add_does_not_touch_file() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);

        assert!(matches!(store.add("", "x"), Err(Error::EmptyField { .. })));
        assert!(!store.path().exists());

        store.add("pear", "a fruit").unwrap();
        let before = fs::read_to_string(store.path()).unwrap();
        assert!(matches!(
            store.add(" PEAR ", "other"),
            Err(Error::Duplicate { .. })
        ));
        assert_eq!(fs::read_to_string(store.path()).unwrap(), before);
    }

    #[test]
    fn unreadable_path_is_a_persistence_error() {
        let dir = TempDir::new().unwrap();
        // A directory where the file should be
        let err = WordStore::open(dir.path()).unwrap_err();
        assert!(matches!(err, Error::Persistence { .. }));
        assert!(!err.is_recoverable());
    }
}

use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::Context;
use wordbook_config::Config;

/// `<config_dir>/wordbook/config.json`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("wordbook").join("config.json"))
}

fn read_config(path: &Path) -> anyhow::Result<Config> {
    tracing::info!("Loading config from {}", path.display());
    let file =
        File::open(path).with_context(|| format!("Failed to open config {}", path.display()))?;
    let config = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Invalid config {}", path.display()))?;
    Ok(config)
}

/// Defaults overlaid with the config file, without environment overrides.
///
/// An explicitly named file must exist; the default one is optional.
pub fn file_config(explicit: Option<&Path>) -> anyhow::Result<Config> {
    match explicit {
        Some(path) => read_config(path),
        None => match default_config_path() {
            Some(path) if path.exists() => read_config(&path),
            _ => {
                tracing::debug!("No config file, using defaults");
                Ok(Config::default())
            }
        },
    }
}

/// Defaults, then the config file, then `WORDBOOK_*` variables.
pub fn load_config(explicit: Option<&Path>) -> anyhow::Result<Config> {
    let mut config = file_config(explicit)?;
    config.apply_env();
    Ok(config)
}

/// Write the default configuration to `path` unless a file is already
/// there. Returns whether a file was created.
///
/// Command-line and environment overrides are never written.
pub fn init_config(path: &Path) -> anyhow::Result<bool> {
    if path.exists() {
        return Ok(false);
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(path, serde_json::to_string_pretty(&Config::default())?)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    tracing::info!("Created config {}", path.display());
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn explicit_file_overrides_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        fs::write(
            &path,
            r#"{ "store": { "path": "/tmp/words.json" }, "review": { "pace_ms": 0 } }"#,
        )
        .unwrap();

        let config = file_config(Some(&path)).unwrap();
        assert_eq!(config.store.path, PathBuf::from("/tmp/words.json"));
        assert_eq!(config.review.pace_ms, 0);
        assert_eq!(config.lookup.timeout_seconds, 10);
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let err = load_config(Some(&dir.path().join("nope.json"))).unwrap_err();
        assert!(err.to_string().contains("Failed to open config"));
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "review = fast").unwrap();
        let err = load_config(Some(&path)).unwrap_err();
        assert!(err.to_string().contains("Invalid config"));
    }

    #[test]
    fn init_does_not_overwrite() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("wordbook").join("config.json");

        assert!(init_config(&path).unwrap());
        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("\"pace_ms\": 800"));

        fs::write(&path, r#"{ "review": { "pace_ms": 5 } }"#).unwrap();
        assert!(!init_config(&path).unwrap());
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            r#"{ "review": { "pace_ms": 5 } }"#
        );
    }

    #[test]
    fn init_writes_defaults_not_the_running_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");

        assert!(init_config(&path).unwrap());
        let written = file_config(Some(&path)).unwrap();
        let defaults = Config::default();
        assert_eq!(written.store.path, defaults.store.path);
        assert_eq!(written.lookup.endpoint, defaults.lookup.endpoint);
        assert_eq!(written.lookup.timeout_seconds, defaults.lookup.timeout_seconds);
        assert_eq!(written.review.pace_ms, defaults.review.pace_ms);
    }
}

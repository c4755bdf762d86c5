//! Configuration store
//!
//! Loads configuration sources and merges them into a single hierarchical
//! tree. Uses figment providers for parsing; `merge` gives the
//! right-biased semantics the bootstrapper relies on: a key present in a
//! later source wins, nested tables merge per-key rather than replacing
//! the whole subtree.

use crate::config::ConfigFormat;
use crate::logging::log_config_loaded;
use appstrap_domain::{Error, Result};
use figment::providers::{Format, Json, Toml, Yaml};
use figment::Figment;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

/// Layered configuration store
///
/// The first added source becomes the root tree; each subsequent source
/// is deep-merged into it. Reads never fail for missing keys; factories
/// that require a key use [`require_string`](Self::require_string).
#[derive(Debug, Clone)]
pub struct ConfigStore {
    figment: Figment,
    sources: Vec<PathBuf>,
}

impl ConfigStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            figment: Figment::new(),
            sources: Vec::new(),
        }
    }

    /// Parse a source file and merge it into the configuration tree
    ///
    /// Fails with [`Error::SourceNotFound`] when `path` does not exist
    /// and with [`Error::Configuration`] when the file does not parse in
    /// the given format. Parse failures surface here, not at first read.
    pub fn add_source<P: AsRef<Path>>(&mut self, path: P, format: ConfigFormat) -> Result<()> {
        let path = path.as_ref();
        if !path.exists() {
            log_config_loaded(path, false);
            return Err(Error::source_not_found(path.display().to_string()));
        }

        let merged = match format {
            ConfigFormat::Json => self.figment.clone().merge(Json::file(path)),
            ConfigFormat::Toml => self.figment.clone().merge(Toml::file(path)),
            ConfigFormat::Yaml => self.figment.clone().merge(Yaml::file(path)),
        };

        merged.extract::<figment::value::Value>().map_err(|e| {
            Error::configuration_with_source(
                format!(
                    "Failed to parse configuration source {} as {}",
                    path.display(),
                    format
                ),
                e,
            )
        })?;

        self.figment = merged;
        self.sources.push(path.to_path_buf());
        log_config_loaded(path, true);
        Ok(())
    }

    /// Read the value at a dotted key path
    ///
    /// Returns `None` when the key is absent or does not deserialize to
    /// `T`; never errors.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        self.figment.extract_inner::<T>(key).ok()
    }

    /// Whether a value exists at the dotted key path
    pub fn contains(&self, key: &str) -> bool {
        self.figment.find_value(key).is_ok()
    }

    /// Read a required string value
    ///
    /// Fails with [`Error::MissingConfiguration`] when the key is absent.
    pub fn require_string(&self, key: &str) -> Result<String> {
        self.get::<String>(key)
            .ok_or_else(|| Error::missing_configuration(key))
    }

    /// Paths of the sources merged so far, in addition order
    pub fn sources(&self) -> &[PathBuf] {
        &self.sources
    }

    /// Whether any source has been added
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

impl Default for ConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, body: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn missing_source_fails() {
        let mut store = ConfigStore::new();
        let err = store
            .add_source("/nonexistent/config.json", ConfigFormat::Json)
            .unwrap_err();
        assert!(matches!(err, Error::SourceNotFound { .. }));
        assert!(store.is_empty());
    }

    #[test]
    fn malformed_source_fails_at_add_time() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "broken.json", "{ not json");

        let mut store = ConfigStore::new();
        let err = store.add_source(&path, ConfigFormat::Json).unwrap_err();
        assert!(matches!(err, Error::Configuration { .. }));
        assert!(store.is_empty());
    }

    #[test]
    fn later_source_wins_on_conflict() {
        let dir = TempDir::new().unwrap();
        let first = write(&dir, "a.json", r#"{"application": {"prefix": "aa", "name": "demo"}}"#);
        let second = write(&dir, "b.json", r#"{"application": {"prefix": "bb"}}"#);

        let mut store = ConfigStore::new();
        store.add_source(&first, ConfigFormat::Json).unwrap();
        store.add_source(&second, ConfigFormat::Json).unwrap();

        // Conflicting key takes the later value; sibling keys survive
        assert_eq!(store.get::<String>("application.prefix").as_deref(), Some("bb"));
        assert_eq!(store.get::<String>("application.name").as_deref(), Some("demo"));
    }

    #[test]
    fn nested_trees_merge_per_key_across_formats() {
        let dir = TempDir::new().unwrap();
        let json = write(&dir, "a.json", r#"{"application": {"prefix": "eg"}}"#);
        let yaml = write(&dir, "b.yaml", "application:\n  modules:\n    - Main\n");
        let toml = write(&dir, "c.toml", "[database]\nhost = \"localhost\"\n");

        let mut store = ConfigStore::new();
        store.add_source(&json, ConfigFormat::Json).unwrap();
        store.add_source(&yaml, ConfigFormat::Yaml).unwrap();
        store.add_source(&toml, ConfigFormat::Toml).unwrap();

        assert_eq!(store.get::<String>("application.prefix").as_deref(), Some("eg"));
        assert_eq!(
            store.get::<Vec<String>>("application.modules"),
            Some(vec!["Main".to_string()])
        );
        assert_eq!(store.get::<String>("database.host").as_deref(), Some("localhost"));
        assert_eq!(store.sources().len(), 3);
    }

    #[test]
    fn missing_keys_read_as_none() {
        let store = ConfigStore::new();
        assert_eq!(store.get::<String>("application.prefix"), None);
        assert!(!store.contains("application"));

        let err = store.require_string("application.prefix").unwrap_err();
        assert!(matches!(err, Error::MissingConfiguration { .. }));
    }
}

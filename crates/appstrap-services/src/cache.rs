//! File-backed key/value cache with TTL
//!
//! Entries are JSON envelopes carrying their stored-at timestamp; reads
//! past the TTL return `None` and remove the stale file. The
//! bootstrapper points this at `<app>/cache/db/` with a one-day TTL for
//! model data.

use appstrap_domain::{Error, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

/// On-disk entry envelope
#[derive(Debug, Serialize, Deserialize)]
struct CacheEnvelope {
    stored_at: DateTime<Utc>,
    payload: String,
}

/// File-backed cache with a fixed entry time-to-live
#[derive(Debug, Clone)]
pub struct FileCache {
    cache_dir: PathBuf,
    ttl: Duration,
}

impl FileCache {
    /// Create a cache rooted at `cache_dir` with entry lifetime `ttl`
    pub fn new<P: Into<PathBuf>>(cache_dir: P, ttl: Duration) -> Self {
        Self {
            cache_dir: cache_dir.into(),
            ttl,
        }
    }

    /// Directory cache entries are written to
    pub fn cache_dir(&self) -> &Path {
        &self.cache_dir
    }

    /// Entry time-to-live
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Store a JSON payload under `key`
    pub fn set_json(&self, key: &str, payload: &str) -> Result<()> {
        std::fs::create_dir_all(&self.cache_dir).map_err(|e| {
            Error::io_with_source(
                format!("Failed to create cache directory {}", self.cache_dir.display()),
                e,
            )
        })?;

        let envelope = CacheEnvelope {
            stored_at: Utc::now(),
            payload: payload.to_string(),
        };
        let body = serde_json::to_string(&envelope)
            .map_err(|e| Error::io_with_source("Failed to serialize cache entry", e))?;

        std::fs::write(self.entry_path(key), body).map_err(|e| {
            Error::io_with_source(format!("Failed to write cache entry '{key}'"), e)
        })?;
        Ok(())
    }

    /// Read the JSON payload under `key`, honoring the TTL
    ///
    /// Expired or unreadable entries are removed and read as `None`.
    pub fn get_json(&self, key: &str) -> Result<Option<String>> {
        let path = self.entry_path(key);
        let body = match std::fs::read_to_string(&path) {
            Ok(body) => body,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(Error::io_with_source(
                    format!("Failed to read cache entry '{key}'"),
                    e,
                ));
            }
        };

        let envelope: CacheEnvelope = match serde_json::from_str(&body) {
            Ok(envelope) => envelope,
            Err(_) => {
                // Corrupt entry, drop it
                let _ = std::fs::remove_file(&path);
                return Ok(None);
            }
        };

        let age = Utc::now().signed_duration_since(envelope.stored_at);
        if age.num_seconds() >= 0 && (age.num_seconds() as u64) < self.ttl.as_secs() {
            Ok(Some(envelope.payload))
        } else {
            debug!(key, "Cache entry expired");
            let _ = std::fs::remove_file(&path);
            Ok(None)
        }
    }

    /// Remove the entry under `key`, if present
    pub fn delete(&self, key: &str) -> Result<()> {
        match std::fs::remove_file(self.entry_path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(Error::io_with_source(
                format!("Failed to delete cache entry '{key}'"),
                e,
            )),
        }
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        // Keys become filenames; path separators are flattened out
        let safe: String = key
            .chars()
            .map(|c| if c.is_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
            .collect();
        self.cache_dir.join(format!("{safe}.cache"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn round_trip_within_ttl() {
        let dir = TempDir::new().unwrap();
        let cache = FileCache::new(dir.path().join("db"), Duration::from_secs(60));

        cache.set_json("user:1", r#"{"name":"eve"}"#).unwrap();
        assert_eq!(
            cache.get_json("user:1").unwrap().as_deref(),
            Some(r#"{"name":"eve"}"#)
        );
    }

    #[test]
    fn expired_entries_read_as_none() {
        let dir = TempDir::new().unwrap();
        let cache = FileCache::new(dir.path().join("db"), Duration::from_secs(0));

        cache.set_json("stale", "payload").unwrap();
        assert_eq!(cache.get_json("stale").unwrap(), None);
        // Second read stays None after the stale file removal
        assert_eq!(cache.get_json("stale").unwrap(), None);
    }

    #[test]
    fn missing_keys_read_as_none() {
        let dir = TempDir::new().unwrap();
        let cache = FileCache::new(dir.path().join("db"), Duration::from_secs(60));
        assert_eq!(cache.get_json("nothing").unwrap(), None);
    }
}

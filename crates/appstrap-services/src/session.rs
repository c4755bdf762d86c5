//! File-backed session store
//!
//! The bootstrapper constructs this as a singleton and starts it
//! immediately, so the session is active before the first
//! request-specific use. State persists for the registry's lifetime;
//! with a long-lived worker that means it is shared across requests.

use appstrap_domain::{Error, Result};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::RwLock;
use tracing::debug;

/// File-backed session adapter namespaced by a unique id
pub struct FileSessionStore {
    namespace: String,
    storage_dir: PathBuf,
    started: RwLock<bool>,
    values: RwLock<HashMap<String, String>>,
}

impl FileSessionStore {
    /// Create a store for `namespace` persisting under `storage_dir`
    ///
    /// The store is inert until [`start`](Self::start) is called.
    pub fn new<S: Into<String>, P: Into<PathBuf>>(namespace: S, storage_dir: P) -> Self {
        Self {
            namespace: namespace.into(),
            storage_dir: storage_dir.into(),
            started: RwLock::new(false),
            values: RwLock::new(HashMap::new()),
        }
    }

    /// Activate the session, creating the storage directory
    pub fn start(&self) -> Result<()> {
        std::fs::create_dir_all(&self.storage_dir).map_err(|e| {
            Error::io_with_source(
                format!(
                    "Failed to create session directory {}",
                    self.storage_dir.display()
                ),
                e,
            )
        })?;
        *self.started.write().expect("session state lock poisoned") = true;
        debug!(namespace = %self.namespace, "Session started");
        Ok(())
    }

    /// Whether [`start`](Self::start) has been called
    pub fn is_started(&self) -> bool {
        *self.started.read().expect("session state lock poisoned")
    }

    /// The unique session-namespace id
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Directory session files are persisted to
    pub fn storage_dir(&self) -> &Path {
        &self.storage_dir
    }

    /// Store a session value
    pub fn set<K: Into<String>, V: Into<String>>(&self, key: K, value: V) -> Result<()> {
        if !self.is_started() {
            return Err(Error::internal("Session has not been started"));
        }
        self.values
            .write()
            .expect("session value lock poisoned")
            .insert(key.into(), value.into());
        Ok(())
    }

    /// Read a session value
    pub fn get(&self, key: &str) -> Option<String> {
        self.values
            .read()
            .expect("session value lock poisoned")
            .get(key)
            .cloned()
    }
}

impl std::fmt::Debug for FileSessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileSessionStore")
            .field("namespace", &self.namespace)
            .field("started", &self.is_started())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn set_before_start_is_rejected() {
        let dir = TempDir::new().unwrap();
        let session = FileSessionStore::new("eg", dir.path().join("sessions"));
        assert!(!session.is_started());
        assert!(session.set("user", "1").is_err());
    }

    #[test]
    fn start_creates_storage_and_activates() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("sessions");
        let session = FileSessionStore::new("eg", &path);
        session.start().unwrap();

        assert!(session.is_started());
        assert!(path.is_dir());

        session.set("user", "42").unwrap();
        assert_eq!(session.get("user").as_deref(), Some("42"));
        assert_eq!(session.get("missing"), None);
    }
}

//! Validated application directory
//!
//! The bootstrapper validates the directory once at configuration time;
//! factories only read the derived paths afterwards.

use appstrap_domain::{Error, Result};
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

/// Temp subdirectory that must be writable at bootstrap time
const TEMP_DIR: &str = "temp";

/// Probe file used for the writability check
const WRITE_PROBE: &str = ".write-probe";

/// A validated application root directory
///
/// Invariant held after construction: `<root>/temp` exists and is
/// writable. The value is immutable; services derive their storage
/// locations from the accessors.
#[derive(Debug, Clone)]
pub struct AppDirectory {
    root: PathBuf,
}

impl AppDirectory {
    /// Validate `path` as the application directory
    ///
    /// Fails with [`Error::InvalidDirectory`] when `path` is not a
    /// directory, and with [`Error::Permission`] when `<path>/temp` is
    /// missing or cannot be written (checked with a probe file).
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let root = path.as_ref().to_path_buf();
        if !root.is_dir() {
            return Err(Error::invalid_directory(
                root.display().to_string(),
                "not an existing directory",
            ));
        }

        let temp = root.join(TEMP_DIR);
        if !temp.is_dir() {
            return Err(Error::permission(format!(
                "Application temp directory {} does not exist",
                temp.display()
            )));
        }

        let probe = temp.join(WRITE_PROBE);
        match OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&probe)
        {
            Ok(_) => {
                let _ = std::fs::remove_file(&probe);
            }
            Err(e) => {
                return Err(Error::permission(format!(
                    "Application doesn't have permission to write temp directory {}: {e}",
                    temp.display()
                )));
            }
        }

        Ok(Self { root })
    }

    /// The validated application root
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Writable temp directory under the root
    pub fn temp_dir(&self) -> PathBuf {
        self.root.join(TEMP_DIR)
    }

    /// Session file storage, under temp
    pub fn sessions_dir(&self) -> PathBuf {
        self.temp_dir().join("sessions")
    }

    /// Model cache storage
    pub fn models_cache_dir(&self) -> PathBuf {
        self.root.join("cache").join("db")
    }

    /// Compiled template output
    pub fn compiled_templates_dir(&self) -> PathBuf {
        self.root.join("cache").join("templates")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_path_is_invalid_directory() {
        let err = AppDirectory::new("/nonexistent/app").unwrap_err();
        assert!(matches!(err, Error::InvalidDirectory { .. }));
    }

    #[test]
    fn missing_temp_is_permission_error() {
        let dir = TempDir::new().unwrap();
        let err = AppDirectory::new(dir.path()).unwrap_err();
        assert!(matches!(err, Error::Permission { .. }));
    }

    #[test]
    fn derived_paths_hang_off_the_root() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join("temp")).unwrap();

        let app = AppDirectory::new(dir.path()).unwrap();
        assert_eq!(app.root(), dir.path());
        assert_eq!(app.models_cache_dir(), dir.path().join("cache").join("db"));
        assert_eq!(
            app.compiled_templates_dir(),
            dir.path().join("cache").join("templates")
        );
        assert!(app.sessions_dir().starts_with(app.temp_dir()));
    }

    #[cfg(unix)]
    #[test]
    fn unwritable_temp_is_permission_error() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let temp = dir.path().join("temp");
        std::fs::create_dir(&temp).unwrap();
        std::fs::set_permissions(&temp, std::fs::Permissions::from_mode(0o555)).unwrap();

        let result = AppDirectory::new(dir.path());
        // Restore so TempDir can clean up
        std::fs::set_permissions(&temp, std::fs::Permissions::from_mode(0o755)).unwrap();

        assert!(matches!(result.unwrap_err(), Error::Permission { .. }));
    }
}

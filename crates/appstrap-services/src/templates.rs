//! Template compiler service
//!
//! Carries the compiled-output directory and output extension the
//! bootstrapper derives from the application directory.

use std::path::{Path, PathBuf};

/// Template compiler configured with an output location
///
/// Transient: the bootstrapper constructs a fresh instance on every
/// resolution, so per-request option tweaks never leak between cycles.
#[derive(Debug, Clone)]
pub struct TemplateCompiler {
    compiled_dir: PathBuf,
    compiled_extension: String,
}

impl TemplateCompiler {
    /// Create a compiler writing to `compiled_dir` with `extension` output
    pub fn new<P: Into<PathBuf>, S: Into<String>>(compiled_dir: P, extension: S) -> Self {
        Self {
            compiled_dir: compiled_dir.into(),
            compiled_extension: extension.into(),
        }
    }

    /// Directory compiled templates are written to
    pub fn compiled_dir(&self) -> &Path {
        &self.compiled_dir
    }

    /// Extension appended to compiled output files
    pub fn compiled_extension(&self) -> &str {
        &self.compiled_extension
    }

    /// Map a source template path to its compiled output path
    pub fn compiled_path(&self, source: &Path) -> PathBuf {
        let stem = source
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        self.compiled_dir
            .join(format!("{stem}{}", self.compiled_extension))
    }
}

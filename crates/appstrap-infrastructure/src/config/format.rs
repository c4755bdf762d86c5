//! Configuration source formats
//!
//! A closed, enumerated adapter set. Adding a format is a code change,
//! not configuration; there is no dynamic adapter lookup.

use appstrap_domain::{Error, Result};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Supported configuration file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigFormat {
    /// JSON documents
    Json,
    /// TOML, the native structured format
    Toml,
    /// YAML structured markup
    Yaml,
}

impl ConfigFormat {
    /// Canonical adapter name
    pub fn name(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Toml => "toml",
            Self::Yaml => "yaml",
        }
    }

    /// Infer the format from a file extension
    ///
    /// Fails with [`Error::AdapterNotFound`] for unknown extensions, so
    /// callers never fall through to a guessed parser.
    pub fn from_extension(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();
        extension.parse()
    }
}

impl FromStr for ConfigFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "toml" => Ok(Self::Toml),
            "yaml" | "yml" => Ok(Self::Yaml),
            other => Err(Error::adapter_not_found(other)),
        }
    }
}

impl fmt::Display for ConfigFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_names_parse() {
        assert_eq!("json".parse::<ConfigFormat>().unwrap(), ConfigFormat::Json);
        assert_eq!("TOML".parse::<ConfigFormat>().unwrap(), ConfigFormat::Toml);
        assert_eq!("yml".parse::<ConfigFormat>().unwrap(), ConfigFormat::Yaml);
    }

    #[test]
    fn unknown_name_is_adapter_not_found() {
        let err = "ini".parse::<ConfigFormat>().unwrap_err();
        assert!(matches!(err, Error::AdapterNotFound { .. }));
    }

    #[test]
    fn extension_inference() {
        let format = ConfigFormat::from_extension(Path::new("config/app.yaml")).unwrap();
        assert_eq!(format, ConfigFormat::Yaml);

        let err = ConfigFormat::from_extension(Path::new("config/app")).unwrap_err();
        assert!(matches!(err, Error::AdapterNotFound { .. }));
    }
}

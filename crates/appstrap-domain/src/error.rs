//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the appstrap bootstrapper
///
/// Every variant is raised synchronously at the point of the violated
/// precondition. The bootstrapper and the service registry never catch
/// these; they propagate to the caller, which decides whether to abort
/// startup.
#[derive(Error, Debug)]
pub enum Error {
    /// Requested configuration format is not in the supported set
    #[error("Unknown configuration adapter '{format}'. Supported adapters: json, toml, yaml")]
    AdapterNotFound {
        /// The unrecognized format name
        format: String,
    },

    /// Configuration source file does not exist
    #[error("Configuration file '{path}' doesn't exist")]
    SourceNotFound {
        /// Path that was looked up
        path: String,
    },

    /// Application directory path is not a directory
    #[error("'{path}' is not a directory: {message}")]
    InvalidDirectory {
        /// The offending path
        path: String,
        /// Description of the violation
        message: String,
    },

    /// Required filesystem location is not writable
    #[error("Permission denied: {message}")]
    Permission {
        /// Description of the missing permission
        message: String,
    },

    /// A required configuration key is absent
    #[error("Missing required configuration key '{key}'")]
    MissingConfiguration {
        /// Dotted path of the missing key
        key: String,
    },

    /// No service registered under the requested name
    #[error("Service '{name}' is not registered")]
    ServiceNotFound {
        /// The unresolved service name
        name: String,
    },

    /// Factories form a resolution cycle
    #[error("Circular dependency detected while resolving service '{name}'")]
    CircularDependency {
        /// Service whose resolution re-entered itself
        name: String,
    },

    /// Configuration-related error (parse failures, invalid values)
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// I/O operation error
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Dispatch cycle failure that no hook recovered
    #[error("Dispatch error: {message}")]
    Dispatch {
        /// Description of the dispatch failure
        message: String,
    },

    /// Internal system error
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error
        message: String,
    },
}

// Configuration error creation methods
impl Error {
    /// Create an adapter-not-found error
    pub fn adapter_not_found<S: Into<String>>(format: S) -> Self {
        Self::AdapterNotFound {
            format: format.into(),
        }
    }

    /// Create a source-not-found error
    pub fn source_not_found<S: Into<String>>(path: S) -> Self {
        Self::SourceNotFound { path: path.into() }
    }

    /// Create a missing-configuration error
    pub fn missing_configuration<S: Into<String>>(key: S) -> Self {
        Self::MissingConfiguration { key: key.into() }
    }

    /// Create a configuration error (no source)
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

// Filesystem error creation methods
impl Error {
    /// Create an invalid-directory error
    pub fn invalid_directory<P: Into<String>, S: Into<String>>(path: P, message: S) -> Self {
        Self::InvalidDirectory {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a permission error
    pub fn permission<S: Into<String>>(message: S) -> Self {
        Self::Permission {
            message: message.into(),
        }
    }

    /// Create an I/O error
    pub fn io<S: Into<String>>(message: S) -> Self {
        Self::Io {
            message: message.into(),
            source: None,
        }
    }

    /// Create an I/O error with source
    pub fn io_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Io {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

// Registry and dispatch error creation methods
impl Error {
    /// Create a service-not-found error
    pub fn service_not_found<S: Into<String>>(name: S) -> Self {
        Self::ServiceNotFound { name: name.into() }
    }

    /// Create a circular-dependency error
    pub fn circular_dependency<S: Into<String>>(name: S) -> Self {
        Self::CircularDependency { name: name.into() }
    }

    /// Create a dispatch error
    pub fn dispatch<S: Into<String>>(message: S) -> Self {
        Self::Dispatch {
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Self::Io {
            message: source.to_string(),
            source: Some(Box::new(source)),
        }
    }
}

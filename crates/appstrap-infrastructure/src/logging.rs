//! Structured logging with tracing
//!
//! Centralized logging configuration using the tracing ecosystem: an
//! env-filter layered over a fmt subscriber, with optional JSON output.

use crate::config::ConfigStore;
use appstrap_domain::constants::{CONFIG_KEY_LOGGING_JSON, CONFIG_KEY_LOGGING_LEVEL};
use appstrap_domain::{Error, Result};
use tracing::{info, warn, Level};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Environment variable overriding the configured log filter
const LOG_ENV_VAR: &str = "APPSTRAP_LOG";

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level name ("trace".."error")
    pub level: String,
    /// Emit JSON-formatted records instead of human-readable ones
    pub json_format: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json_format: false,
        }
    }
}

impl LoggingConfig {
    /// Read logging settings from the configuration store
    ///
    /// Missing keys fall back to the defaults; logging config is never
    /// required.
    pub fn from_store(store: &ConfigStore) -> Self {
        let defaults = Self::default();
        Self {
            level: store
                .get::<String>(CONFIG_KEY_LOGGING_LEVEL)
                .unwrap_or(defaults.level),
            json_format: store
                .get::<bool>(CONFIG_KEY_LOGGING_JSON)
                .unwrap_or(defaults.json_format),
        }
    }
}

/// Initialize logging with the provided configuration
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let level = parse_log_level(&config.level)?;
    let filter =
        EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(&config.level));

    // json/plain layers have different types, so two branches
    let result = if config.json_format {
        let stdout = fmt::layer().json().with_target(true);
        Registry::default().with(filter).with(stdout).try_init()
    } else {
        let stdout = fmt::layer().with_target(true);
        Registry::default().with(filter).with(stdout).try_init()
    };

    result.map_err(|e| Error::Internal {
        message: format!("Failed to initialize logging: {e}"),
    })?;

    info!("Logging initialized with level: {}", level);
    Ok(())
}

/// Parse log level string to tracing Level
pub fn parse_log_level(level: &str) -> Result<Level> {
    match level.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" | "warning" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => Err(Error::configuration(format!(
            "Invalid log level: {level}. Use trace, debug, info, warn, or error"
        ))),
    }
}

/// Log configuration loading status
pub fn log_config_loaded(config_path: &std::path::Path, success: bool) {
    if success {
        info!("Configuration loaded from {}", config_path.display());
    } else {
        warn!("Configuration file not found: {}", config_path.display());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_names_parse() {
        assert_eq!(parse_log_level("debug").unwrap(), Level::DEBUG);
        assert_eq!(parse_log_level("WARNING").unwrap(), Level::WARN);
        assert!(parse_log_level("loud").is_err());
    }

    #[test]
    fn missing_logging_keys_fall_back_to_defaults() {
        let store = ConfigStore::new();
        let config = LoggingConfig::from_store(&store);
        assert_eq!(config.level, "info");
        assert!(!config.json_format);
    }
}

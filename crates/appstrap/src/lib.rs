//! # Appstrap
//!
//! Application bootstrapper with layered configuration and a
//! named-service registry.
//!
//! This crate is the public facade: it re-exports the domain types, the
//! service implementations and the infrastructure layer behind one
//! import path.
//!
//! ## Example
//!
//! ```no_run
//! use appstrap::infrastructure::config::ConfigFormat;
//! use appstrap::infrastructure::Bootstrapper;
//! use appstrap::services::FileSessionStore;
//!
//! # fn main() -> appstrap::domain::Result<()> {
//! let mut bootstrapper = Bootstrapper::new().with_debug_mode(true);
//! bootstrapper.set_app_directory("/srv/app")?;
//! bootstrapper.add_configuration("/srv/app/config/base.json", ConfigFormat::Json)?;
//! bootstrapper.add_configuration("/srv/app/config/local.yaml", ConfigFormat::Yaml)?;
//!
//! let registry = bootstrapper.build_service_registry()?;
//! let session = registry.resolve::<FileSessionStore>("session")?;
//! assert!(session.is_started());
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! - `domain` - Errors, results and the shared constant vocabulary
//! - `services` - Concrete service implementations the bootstrapper registers
//! - `infrastructure` - Configuration, DI, dispatch and logging

/// Domain layer - errors, results and shared constants
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use appstrap_domain::*;
}

/// Service implementations the bootstrapper registers
///
/// Re-exports from the services crate for convenience
pub mod services {
    pub use appstrap_services::*;
}

/// Infrastructure layer - config, DI, dispatch and logging
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use appstrap_infrastructure::*;
}

// Re-export commonly used domain types at the crate root
pub use domain::{Error, Result};

// Re-export the composition-root types at the crate root
pub use infrastructure::{Bootstrapper, ConfigFormat, ConfigStore, ServiceRegistry};

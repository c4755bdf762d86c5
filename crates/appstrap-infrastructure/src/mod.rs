//! # Infrastructure Layer
//!
//! Cross-cutting technical concerns behind the application bootstrapper.
//!
//! ## Module Categories
//!
//! ### Configuration & DI
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Layered multi-format configuration with right-biased merge |
//! | [`di`] | Named-service registry and the bootstrapper composition root |
//! | [`app_directory`] | Validated application directory with derived paths |
//! | [`autoload`] | Namespace/path registrar stub |
//!
//! ### Dispatch
//! | Module | Description |
//! |--------|-------------|
//! | [`dispatch`] | Dispatcher with ordered pre-dispatch/exception hook chain |
//!
//! ### Observability
//! | Module | Description |
//! |--------|-------------|
//! | [`logging`] | Structured logging with tracing |

pub mod app_directory;
pub mod autoload;
pub mod config;
pub mod di;
pub mod dispatch;
pub mod logging;

// Re-export commonly used types
pub use app_directory::AppDirectory;
pub use autoload::Autoloader;
pub use config::{ConfigFormat, ConfigStore};
pub use di::{Bootstrapper, Lifecycle, ServiceRegistry};
pub use dispatch::{DispatchHookChain, Dispatcher};

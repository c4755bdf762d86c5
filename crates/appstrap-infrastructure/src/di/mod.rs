//! Dependency injection
//!
//! A declarative, factory-based service registry with lazy lifecycle
//! semantics, and the bootstrapper that populates it.
//!
//! ```text
//! Bootstrapper ──▶ ConfigStore + AppDirectory
//!       │
//!       ▼
//! build_service_registry()
//!       │  register(name, lifecycle, factory)   (fixed service set)
//!       ▼
//! ServiceRegistry ──resolve(name)──▶ Arc<Service>
//!       │                     (factory runs at most once for singletons)
//!       └── factories may resolve dependencies by name; cycles fail fast
//! ```

pub mod bootstrap;
pub mod registry;

pub use bootstrap::Bootstrapper;
pub use registry::{Lifecycle, ServiceDescriptor, ServiceInstance, ServiceRegistry};

//! Layered configuration
//!
//! Multiple configuration sources of heterogeneous formats merged into
//! one logical tree. Formats are a closed set ([`ConfigFormat`]); merge
//! semantics are figment's right-biased deep merge, so a later source
//! overrides or extends an earlier one at every depth.

pub mod format;
pub mod store;

pub use format::ConfigFormat;
pub use store::ConfigStore;

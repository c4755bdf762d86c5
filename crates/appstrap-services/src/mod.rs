//! # Framework Services
//!
//! Concrete service implementations the bootstrapper registers into the
//! service registry. Each type carries exactly the configuration surface
//! the bootstrapper sets on it (layout name, engine map, namespace id,
//! TTL, directories, flags); storage-engine internals are deliberately
//! minimal.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`view`] | View renderer with layout and engine mapping |
//! | [`templates`] | Template compiler output configuration |
//! | [`session`] | File-backed session store, eagerly started |
//! | [`cache`] | File-backed key/value cache with TTL |
//! | [`cookies`] | Cookie jar with an encryption toggle |
//! | [`security`] | bcrypt password-hashing helper |

pub mod cache;
pub mod cookies;
pub mod security;
pub mod session;
pub mod templates;
pub mod view;

pub use cache::FileCache;
pub use cookies::CookieJar;
pub use security::SecurityService;
pub use session::FileSessionStore;
pub use templates::TemplateCompiler;
pub use view::ViewRenderer;

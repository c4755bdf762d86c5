//! Domain layer constants
//!
//! The fixed service set the bootstrapper registers, the configuration
//! keys it consumes, and the defaults it applies. Infrastructure-specific
//! values (env prefixes, probe filenames) live with their modules.

// ============================================================================
// SERVICE NAMES
// ============================================================================

/// View renderer service (singleton)
pub const SERVICE_VIEW: &str = "view";

/// Template compiler service (transient)
pub const SERVICE_TEMPLATE_COMPILER: &str = "template_compiler";

/// Request dispatcher service (transient)
pub const SERVICE_DISPATCHER: &str = "dispatcher";

/// Session store service (singleton)
pub const SERVICE_SESSION: &str = "session";

/// Model cache service (transient)
pub const SERVICE_MODELS_CACHE: &str = "models_cache";

/// Cookie jar service (singleton)
pub const SERVICE_COOKIES: &str = "cookies";

/// Security helper service (singleton)
pub const SERVICE_SECURITY: &str = "security";

// ============================================================================
// CONFIGURATION KEYS
// ============================================================================

/// Application node holding the module list and session prefix
pub const CONFIG_KEY_APPLICATION: &str = "application";

/// Unique session-namespace id, required by the session service
pub const CONFIG_KEY_APPLICATION_PREFIX: &str = "application.prefix";

/// Ordered module list, required only when module autoloading is enabled
pub const CONFIG_KEY_APPLICATION_MODULES: &str = "application.modules";

/// Log level override ("trace".."error")
pub const CONFIG_KEY_LOGGING_LEVEL: &str = "logging.level";

/// JSON log output toggle
pub const CONFIG_KEY_LOGGING_JSON: &str = "logging.json";

// ============================================================================
// FIXED DEFAULTS
// ============================================================================

/// Default layout name set on the view renderer
pub const DEFAULT_VIEW_LAYOUT: &str = "main";

/// Template file extension routed to the template compiler service
pub const TEMPLATE_SOURCE_EXTENSION: &str = ".tpl";

/// Extension of compiled template output files
pub const TEMPLATE_COMPILED_EXTENSION: &str = ".html";

/// Model cache entry time-to-live in seconds
pub const MODELS_CACHE_TTL_SECS: u64 = 86_400;

/// bcrypt work factor fixed for the security helper
pub const SECURITY_WORK_FACTOR: u32 = 12;

/// Controller that receives internally forwarded dispatch failures
pub const ERROR_CONTROLLER: &str = "error";

/// Action handling handler/action-not-found failures
pub const ERROR_ACTION_NOT_FOUND: &str = "notFoundException";

/// Action handling uncaught dispatch exceptions in debug mode
pub const ERROR_ACTION_UNCAUGHT: &str = "uncaughtException";

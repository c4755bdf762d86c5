//! Application bootstrapper
//!
//! Composition root: collects configuration sources and the validated
//! application directory, then populates a [`ServiceRegistry`] with the
//! fixed application service set. Registration is declarative; no
//! service is constructed until first resolution.
//!
//! Registered services:
//!
//! | Name                | Lifecycle | Instance                                  |
//! |---------------------|-----------|-------------------------------------------|
//! | `view`              | singleton | [`ViewRenderer`], layout `main`, `.tpl` engine |
//! | `template_compiler` | transient | [`TemplateCompiler`] into `cache/templates` |
//! | `dispatcher`        | transient | [`Dispatcher`] with the default hook chain |
//! | `session`           | singleton | [`FileSessionStore`], started immediately  |
//! | `models_cache`      | transient | [`FileCache`] in `cache/db`, one-day TTL   |
//! | `cookies`           | singleton | [`CookieJar`], encryption disabled         |
//! | `security`          | singleton | [`SecurityService`], work factor 12        |

use crate::app_directory::AppDirectory;
use crate::autoload::Autoloader;
use crate::config::{ConfigFormat, ConfigStore};
use crate::di::registry::{Lifecycle, ServiceRegistry};
use crate::dispatch::{default_hook_chain, Dispatcher};
use appstrap_domain::constants::{
    CONFIG_KEY_APPLICATION, CONFIG_KEY_APPLICATION_MODULES, CONFIG_KEY_APPLICATION_PREFIX,
    DEFAULT_VIEW_LAYOUT,
    MODELS_CACHE_TTL_SECS, SECURITY_WORK_FACTOR, SERVICE_COOKIES, SERVICE_DISPATCHER,
    SERVICE_MODELS_CACHE, SERVICE_SECURITY, SERVICE_SESSION, SERVICE_TEMPLATE_COMPILER,
    SERVICE_VIEW, TEMPLATE_COMPILED_EXTENSION, TEMPLATE_SOURCE_EXTENSION,
};
use appstrap_domain::{Error, Result};
use appstrap_services::{
    CookieJar, FileCache, FileSessionStore, SecurityService, TemplateCompiler, ViewRenderer,
};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// Builder for the application service registry
#[derive(Debug)]
pub struct Bootstrapper {
    settings: ConfigStore,
    app_directory: Option<AppDirectory>,
    debug_mode: bool,
    plugins_enabled: bool,
}

impl Bootstrapper {
    /// Create a bootstrapper with empty settings and plugins enabled
    pub fn new() -> Self {
        Self {
            settings: ConfigStore::new(),
            app_directory: None,
            debug_mode: false,
            plugins_enabled: true,
        }
    }

    /// Set debug mode, which widens exception forwarding in dispatch
    pub fn with_debug_mode(mut self, debug_mode: bool) -> Self {
        self.debug_mode = debug_mode;
        self
    }

    /// Whether debug mode is on
    pub fn debug_mode(&self) -> bool {
        self.debug_mode
    }

    /// Validate and record the application directory
    ///
    /// Fails when the directory does not exist or its `temp`
    /// subdirectory is missing or unwritable.
    pub fn set_app_directory<P: AsRef<Path>>(&mut self, path: P) -> Result<&mut Self> {
        let app_directory = AppDirectory::new(path)?;
        info!(root = %app_directory.root().display(), "Application directory validated");
        self.app_directory = Some(app_directory);
        Ok(self)
    }

    /// The validated application directory, if set
    pub fn app_directory(&self) -> Option<&AppDirectory> {
        self.app_directory.as_ref()
    }

    /// Parse a configuration source and merge it into the settings
    ///
    /// Later sources win on conflicting keys; nested tables merge
    /// per-key.
    pub fn add_configuration<P: AsRef<Path>>(
        &mut self,
        path: P,
        format: ConfigFormat,
    ) -> Result<&mut Self> {
        self.settings.add_source(path, format)?;
        Ok(self)
    }

    /// The merged settings accumulated so far
    pub fn settings(&self) -> &ConfigStore {
        &self.settings
    }

    /// Record that plugin loading is enabled
    ///
    /// The flag is recorded for plugin-loading logic outside this core;
    /// it has no other observable effect here.
    pub fn enable_plugins(&mut self) -> &mut Self {
        self.plugins_enabled = true;
        self
    }

    /// Record that plugin loading is disabled
    pub fn disable_plugins(&mut self) -> &mut Self {
        self.plugins_enabled = false;
        self
    }

    /// The recorded plugins flag
    pub fn plugins_enabled(&self) -> bool {
        self.plugins_enabled
    }

    /// Module names declared under `application.modules`
    ///
    /// Fails with [`Error::MissingConfiguration`] when the
    /// `application` node or its `modules` list is absent. Module-based
    /// registration is dormant: the list is surfaced for callers but
    /// [`create_autoloader`](Self::create_autoloader) does not act on
    /// it.
    pub fn registered_modules(&self) -> Result<Vec<String>> {
        if !self.settings.contains(CONFIG_KEY_APPLICATION) {
            return Err(Error::missing_configuration(CONFIG_KEY_APPLICATION));
        }
        self.settings
            .get::<Vec<String>>(CONFIG_KEY_APPLICATION_MODULES)
            .ok_or_else(|| Error::missing_configuration(CONFIG_KEY_APPLICATION_MODULES))
    }

    /// Create the namespace autoloader
    ///
    /// Returned empty; callers register their own namespaces.
    pub fn create_autoloader(&self) -> Autoloader {
        Autoloader::new()
    }

    /// Build the service registry with the fixed application services
    ///
    /// Fails fast when no application directory has been set; everything
    /// else is deferred to the factories, so a missing
    /// `application.prefix` surfaces on first `session` resolution, not
    /// here.
    pub fn build_service_registry(&self) -> Result<ServiceRegistry> {
        let app_directory = self.app_directory.clone().ok_or_else(|| {
            Error::invalid_directory("<unset>", "application directory must be set before build")
        })?;
        let settings = Arc::new(self.settings.clone());
        let registry = ServiceRegistry::new();

        registry.register(SERVICE_VIEW, Lifecycle::Singleton, |_| {
            let view = ViewRenderer::new();
            view.set_layout(DEFAULT_VIEW_LAYOUT);
            view.register_engine(TEMPLATE_SOURCE_EXTENSION, SERVICE_TEMPLATE_COMPILER);
            Ok(Arc::new(view))
        });

        let templates_dir = app_directory.compiled_templates_dir();
        registry.register(SERVICE_TEMPLATE_COMPILER, Lifecycle::Transient, move |_| {
            Ok(Arc::new(TemplateCompiler::new(
                templates_dir.clone(),
                TEMPLATE_COMPILED_EXTENSION,
            )))
        });

        let debug_mode = self.debug_mode;
        registry.register(SERVICE_DISPATCHER, Lifecycle::Transient, move |_| {
            Ok(Arc::new(Dispatcher::new(default_hook_chain(debug_mode))))
        });

        let session_settings = settings.clone();
        let sessions_dir = app_directory.sessions_dir();
        registry.register(SERVICE_SESSION, Lifecycle::Singleton, move |_| {
            let prefix = session_settings.require_string(CONFIG_KEY_APPLICATION_PREFIX)?;
            let session = FileSessionStore::new(prefix, sessions_dir.clone());
            session.start()?;
            Ok(Arc::new(session))
        });

        let models_cache_dir = app_directory.models_cache_dir();
        registry.register(SERVICE_MODELS_CACHE, Lifecycle::Transient, move |_| {
            Ok(Arc::new(FileCache::new(
                models_cache_dir.clone(),
                Duration::from_secs(MODELS_CACHE_TTL_SECS),
            )))
        });

        registry.register(SERVICE_COOKIES, Lifecycle::Singleton, |_| {
            let cookies = CookieJar::new();
            cookies.use_encryption(false);
            Ok(Arc::new(cookies))
        });

        registry.register(SERVICE_SECURITY, Lifecycle::Singleton, |_| {
            Ok(Arc::new(SecurityService::new(SECURITY_WORK_FACTOR)))
        });

        info!(
            services = registry.names().len(),
            debug_mode = self.debug_mode,
            "Service registry built"
        );
        Ok(registry)
    }
}

impl Default for Bootstrapper {
    fn default() -> Self {
        Self::new()
    }
}

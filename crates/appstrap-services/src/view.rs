//! View renderer service
//!
//! Holds the layout name and the extension-to-compiler-service mapping
//! the bootstrapper configures. Template compilation itself is delegated
//! to whichever compiler service an extension is mapped to.

use std::collections::HashMap;
use std::sync::RwLock;

/// View renderer bound to named template-compiler services
///
/// Engines are registered as a mapping from a template file extension to
/// the name of the compiler service that handles it. The renderer never
/// instantiates compilers; resolution by name stays with the registry.
pub struct ViewRenderer {
    layout: RwLock<String>,
    engines: RwLock<HashMap<String, String>>,
}

impl ViewRenderer {
    /// Create a renderer with no layout and no engines registered
    pub fn new() -> Self {
        Self {
            layout: RwLock::new(String::new()),
            engines: RwLock::new(HashMap::new()),
        }
    }

    /// Set the default layout name
    pub fn set_layout<S: Into<String>>(&self, layout: S) {
        *self.layout.write().expect("view layout lock poisoned") = layout.into();
    }

    /// Get the configured layout name
    pub fn layout(&self) -> String {
        self.layout.read().expect("view layout lock poisoned").clone()
    }

    /// Map a template extension to a compiler service name
    pub fn register_engine<E: Into<String>, S: Into<String>>(&self, extension: E, service: S) {
        self.engines
            .write()
            .expect("view engine lock poisoned")
            .insert(extension.into(), service.into());
    }

    /// Look up the compiler service registered for an extension
    pub fn engine_for(&self, extension: &str) -> Option<String> {
        self.engines
            .read()
            .expect("view engine lock poisoned")
            .get(extension)
            .cloned()
    }

    /// Render a body inside the configured layout
    ///
    /// Minimal placeholder rendering: the layout wraps the body. Enough
    /// to observe that the layout the bootstrapper set is in effect.
    pub fn render(&self, body: &str) -> String {
        let layout = self.layout();
        if layout.is_empty() {
            body.to_string()
        } else {
            format!("[{layout}]{body}[/{layout}]")
        }
    }
}

impl Default for ViewRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ViewRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ViewRenderer")
            .field("layout", &self.layout())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_wraps_rendered_body() {
        let view = ViewRenderer::new();
        view.set_layout("main");
        assert_eq!(view.render("hello"), "[main]hello[/main]");
    }

    #[test]
    fn engine_mapping_resolves_by_extension() {
        let view = ViewRenderer::new();
        view.register_engine(".tpl", "template_compiler");
        assert_eq!(view.engine_for(".tpl").as_deref(), Some("template_compiler"));
        assert_eq!(view.engine_for(".html"), None);
    }
}

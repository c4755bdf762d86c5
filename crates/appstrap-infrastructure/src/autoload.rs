//! Namespace/path autoloader stub
//!
//! The registrar the bootstrapper hands to callers. Module-based
//! registration exists in configuration (`application.modules`) but is
//! dormant; the default registration list is empty.

use std::path::PathBuf;

/// Namespace-to-path registrar
#[derive(Debug, Default)]
pub struct Autoloader {
    namespaces: Vec<(String, PathBuf)>,
}

impl Autoloader {
    /// Create an autoloader with no registrations
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a namespace rooted at a directory
    pub fn register_namespace<N: Into<String>, P: Into<PathBuf>>(
        &mut self,
        namespace: N,
        path: P,
    ) -> &mut Self {
        self.namespaces.push((namespace.into(), path.into()));
        self
    }

    /// Registered namespace/path pairs, in registration order
    pub fn namespaces(&self) -> &[(String, PathBuf)] {
        &self.namespaces
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty_and_keeps_registration_order() {
        let mut autoloader = Autoloader::new();
        assert!(autoloader.namespaces().is_empty());

        autoloader
            .register_namespace("App\\Controllers", "/app/controllers")
            .register_namespace("App\\Library", "/app/library");

        let names: Vec<&str> = autoloader
            .namespaces()
            .iter()
            .map(|(n, _)| n.as_str())
            .collect();
        assert_eq!(names, ["App\\Controllers", "App\\Library"]);
    }
}

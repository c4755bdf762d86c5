//! Cookie jar service
//!
//! The bootstrapper registers this with payload encryption explicitly
//! disabled; the flag is recorded so callers can observe the choice.

use std::collections::HashMap;
use std::sync::RwLock;

/// Cookie-handling service with an encryption toggle
pub struct CookieJar {
    encryption: RwLock<bool>,
    cookies: RwLock<HashMap<String, String>>,
}

impl CookieJar {
    /// Create an empty jar with encryption enabled
    pub fn new() -> Self {
        Self {
            encryption: RwLock::new(true),
            cookies: RwLock::new(HashMap::new()),
        }
    }

    /// Toggle payload encryption
    pub fn use_encryption(&self, enabled: bool) {
        *self.encryption.write().expect("cookie flag lock poisoned") = enabled;
    }

    /// Whether payload encryption is enabled
    pub fn encryption_enabled(&self) -> bool {
        *self.encryption.read().expect("cookie flag lock poisoned")
    }

    /// Set a cookie value
    pub fn set<K: Into<String>, V: Into<String>>(&self, name: K, value: V) {
        self.cookies
            .write()
            .expect("cookie store lock poisoned")
            .insert(name.into(), value.into());
    }

    /// Read a cookie value
    pub fn get(&self, name: &str) -> Option<String> {
        self.cookies
            .read()
            .expect("cookie store lock poisoned")
            .get(name)
            .cloned()
    }
}

impl Default for CookieJar {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for CookieJar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CookieJar")
            .field("encryption", &self.encryption_enabled())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encryption_toggle_is_recorded() {
        let jar = CookieJar::new();
        assert!(jar.encryption_enabled());
        jar.use_encryption(false);
        assert!(!jar.encryption_enabled());
    }

    #[test]
    fn cookies_round_trip() {
        let jar = CookieJar::new();
        jar.set("sid", "abc123");
        assert_eq!(jar.get("sid").as_deref(), Some("abc123"));
        assert_eq!(jar.get("other"), None);
    }
}

//! Password hashing service using bcrypt

use appstrap_domain::{Error, Result};

/// Password-hashing helper with a fixed work factor
#[derive(Debug, Clone)]
pub struct SecurityService {
    work_factor: u32,
}

impl SecurityService {
    /// Create a security helper hashing at `work_factor` cost
    pub fn new(work_factor: u32) -> Self {
        Self { work_factor }
    }

    /// The configured bcrypt cost
    pub fn work_factor(&self) -> u32 {
        self.work_factor
    }

    /// Hash a password using bcrypt
    pub fn hash_password(&self, password: &str) -> Result<String> {
        bcrypt::hash(password, self.work_factor).map_err(|e| Error::Internal {
            message: format!("Password hashing failed: {e}"),
        })
    }

    /// Verify a password against its hash
    pub fn verify_password(&self, password: &str, hash: &str) -> Result<bool> {
        bcrypt::verify(password, hash).map_err(|e| Error::Internal {
            message: format!("Invalid password hash format: {e}"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_and_verify_round_trip() {
        // Minimum cost keeps the test fast; the bootstrapper pins 12 in production
        let security = SecurityService::new(4);
        let hash = security.hash_password("hunter2").unwrap();

        assert!(security.verify_password("hunter2", &hash).unwrap());
        assert!(!security.verify_password("wrong", &hash).unwrap());
    }

    #[test]
    fn malformed_hash_is_an_error() {
        let security = SecurityService::new(4);
        assert!(security.verify_password("x", "not-a-bcrypt-hash").is_err());
    }
}

//! Bcrypt implementation of the PasswordHasher trait

use cs_core::errors::{DomainError, DomainResult};
use cs_core::services::auth::PasswordHasher;

/// Password hasher backed by bcrypt
pub struct BcryptPasswordHasher {
    cost: u32,
}

impl BcryptPasswordHasher {
    /// Create a hasher with the bcrypt default cost
    pub fn new() -> Self {
        Self {
            cost: bcrypt::DEFAULT_COST,
        }
    }

    /// Create a hasher with an explicit cost (lower costs for tests)
    pub fn with_cost(cost: u32) -> Self {
        Self { cost }
    }
}

impl Default for BcryptPasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordHasher for BcryptPasswordHasher {
    fn hash(&self, plain: &str) -> DomainResult<String> {
        bcrypt::hash(plain, self.cost).map_err(|e| DomainError::Internal {
            message: format!("Password hashing failed: {}", e),
        })
    }

    fn matches(&self, plain: &str, hash: &str) -> bool {
        bcrypt::verify(plain, hash).unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify_round_trip() {
        let hasher = BcryptPasswordHasher::with_cost(4);

        let hash = hasher.hash("secret1").unwrap();

        assert_ne!(hash, "secret1");
        assert!(hasher.matches("secret1", &hash));
        assert!(!hasher.matches("secret2", &hash));
    }

    #[test]
    fn test_malformed_hash_never_matches() {
        let hasher = BcryptPasswordHasher::with_cost(4);
        assert!(!hasher.matches("secret1", "not-a-bcrypt-hash"));
    }
}

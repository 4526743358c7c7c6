//! Collaborator traits consumed by the authentication flows

use async_trait::async_trait;

use crate::errors::DomainResult;

/// One-way password hashing
///
/// The core never stores or compares plaintext passwords; both operations
/// go through this trait.
pub trait PasswordHasher: Send + Sync {
    /// Hash a plaintext password for storage
    fn hash(&self, plain: &str) -> DomainResult<String>;

    /// Check a plaintext password against a stored hash
    fn matches(&self, plain: &str, hash: &str) -> bool;
}

/// Credential verification for the login flow
///
/// The token issuer cannot validate passwords itself; login delegates the
/// username/password check here and only mints tokens on success.
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// Verify a username/password pair
    ///
    /// # Returns
    /// * `Ok(())` - Credentials are valid
    /// * `Err(DomainError::Auth(AuthError::InvalidCredentials))` - Mismatch
    async fn authenticate(&self, username: &str, password: &str) -> DomainResult<()>;
}

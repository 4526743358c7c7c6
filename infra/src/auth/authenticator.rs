//! Credentials authenticator backed by the user repository

use async_trait::async_trait;
use std::sync::Arc;

use cs_core::errors::{AuthError, DomainResult};
use cs_core::repositories::UserRepository;
use cs_core::services::auth::{Authenticator, PasswordHasher};

/// Verifies username/password pairs against stored hashes
///
/// An unknown username and a wrong password produce the same error, so
/// a caller cannot probe which accounts exist.
pub struct CredentialsAuthenticator<U, H>
where
    U: UserRepository,
    H: PasswordHasher,
{
    user_repository: Arc<U>,
    password_hasher: Arc<H>,
}

impl<U, H> CredentialsAuthenticator<U, H>
where
    U: UserRepository,
    H: PasswordHasher,
{
    /// Create a new authenticator
    pub fn new(user_repository: Arc<U>, password_hasher: Arc<H>) -> Self {
        Self {
            user_repository,
            password_hasher,
        }
    }
}

#[async_trait]
impl<U, H> Authenticator for CredentialsAuthenticator<U, H>
where
    U: UserRepository,
    H: PasswordHasher,
{
    async fn authenticate(&self, username: &str, password: &str) -> DomainResult<()> {
        let user = self
            .user_repository
            .find_by_username(username)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if self.password_hasher.matches(password, &user.password_hash) {
            Ok(())
        } else {
            Err(AuthError::InvalidCredentials.into())
        }
    }
}

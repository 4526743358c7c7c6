//! Test doubles for the authentication collaborators

use async_trait::async_trait;
use std::sync::Arc;

use crate::errors::{AuthError, DomainResult};
use crate::repositories::MockUserRepository;
use crate::services::auth::{Authenticator, PasswordHasher};

/// Reversible "hash" so tests can assert on stored values
pub struct PlainTextHasher;

impl PasswordHasher for PlainTextHasher {
    fn hash(&self, plain: &str) -> DomainResult<String> {
        Ok(format!("hashed:{plain}"))
    }

    fn matches(&self, plain: &str, hash: &str) -> bool {
        hash == format!("hashed:{plain}")
    }
}

/// Authenticator backed by the in-memory repository and plain hasher
pub struct MockAuthenticator {
    repository: Arc<MockUserRepository>,
    hasher: PlainTextHasher,
}

impl MockAuthenticator {
    pub fn new(repository: Arc<MockUserRepository>) -> Self {
        Self {
            repository,
            hasher: PlainTextHasher,
        }
    }
}

#[async_trait]
impl Authenticator for MockAuthenticator {
    async fn authenticate(&self, username: &str, password: &str) -> DomainResult<()> {
        use crate::repositories::UserRepository;

        let user = self
            .repository
            .find_by_username(username)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if self.hasher.matches(password, &user.password_hash) {
            Ok(())
        } else {
            Err(AuthError::InvalidCredentials.into())
        }
    }
}

//! User account operations: lookups and password management

use std::sync::Arc;

use tracing::info;

use crate::domain::entities::user::User;
use crate::errors::{AuthError, DomainResult};
use crate::repositories::UserRepository;
use crate::services::auth::PasswordHasher;

/// Service for user lookups and password updates
///
/// Password changes always route through the hasher; plaintext never
/// reaches the repository.
pub struct UserService<U, H>
where
    U: UserRepository,
    H: PasswordHasher,
{
    user_repository: Arc<U>,
    password_hasher: Arc<H>,
}

impl<U, H> UserService<U, H>
where
    U: UserRepository,
    H: PasswordHasher,
{
    /// Create a new user service
    pub fn new(user_repository: Arc<U>, password_hasher: Arc<H>) -> Self {
        Self {
            user_repository,
            password_hasher,
        }
    }

    /// Get a user by username
    pub async fn get_by_username(&self, username: &str) -> DomainResult<User> {
        self.user_repository
            .find_by_username(username)
            .await?
            .ok_or_else(|| AuthError::UserNotFound.into())
    }

    /// Check whether a username is taken
    pub async fn exists_by_username(&self, username: &str) -> DomainResult<bool> {
        self.user_repository.exists_by_username(username).await
    }

    /// Check whether an email is registered
    pub async fn exists_by_email(&self, email: &str) -> DomainResult<bool> {
        self.user_repository.exists_by_email(email).await
    }

    /// Set a new password for the account registered under `email`
    ///
    /// Used by the reset flow after the reset token has been validated.
    pub async fn reset_password(&self, email: &str, new_password: &str) -> DomainResult<()> {
        let mut user = self
            .user_repository
            .find_by_email(email)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        user.set_password_hash(self.password_hasher.hash(new_password)?);
        self.user_repository.update(user).await?;

        info!("Password reset completed for account under {}", email);
        Ok(())
    }

    /// Change a password, requiring the current one to match first
    pub async fn change_password(
        &self,
        username: &str,
        current_password: &str,
        new_password: &str,
    ) -> DomainResult<()> {
        let mut user = self.get_by_username(username).await?;

        if !self
            .password_hasher
            .matches(current_password, &user.password_hash)
        {
            return Err(AuthError::InvalidCurrentPassword.into());
        }

        user.set_password_hash(self.password_hasher.hash(new_password)?);
        self.user_repository.update(user).await?;

        info!("Password changed for user {}", username);
        Ok(())
    }

    /// Set a new password without checking the current one
    ///
    /// Privileged operation; the route layer enforces the admin role.
    pub async fn force_change_password(
        &self,
        username: &str,
        new_password: &str,
    ) -> DomainResult<()> {
        let mut user = self.get_by_username(username).await?;

        user.set_password_hash(self.password_hasher.hash(new_password)?);
        self.user_repository.update(user).await?;

        info!("Password force-changed for user {}", username);
        Ok(())
    }
}

//! User repository trait defining the interface for account persistence.

use async_trait::async_trait;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

/// Repository trait for User entity persistence operations
///
/// The core never caches users; every lookup goes through this trait so
/// the datastore remains the single source of truth. Usernames and email
/// addresses are unique across the store.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by username
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found
    /// * `Ok(None)` - No user with the given username
    /// * `Err(DomainError)` - Datastore error occurred
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError>;

    /// Find a user by email address
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Check whether a username is already taken
    async fn exists_by_username(&self, username: &str) -> Result<bool, DomainError> {
        Ok(self.find_by_username(username).await?.is_some())
    }

    /// Check whether an email address is already registered
    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError> {
        Ok(self.find_by_email(email).await?.is_some())
    }

    /// Persist a new user
    ///
    /// # Returns
    /// * `Ok(User)` - The saved user with any store-generated fields
    /// * `Err(DomainError)` - Save failed (e.g. duplicate username/email)
    async fn create(&self, user: User) -> Result<User, DomainError>;

    /// Update an existing user (matched by id)
    async fn update(&self, user: User) -> Result<User, DomainError>;
}

//! # Contact Search Infrastructure
//!
//! Concrete implementations of the collaborator interfaces defined in
//! `cs_core`: the MySQL user repository, the bcrypt password hasher, the
//! credentials authenticator, and outbound mail delivery.

pub mod auth;
pub mod database;
pub mod mailer;

// Re-export commonly used types
pub use auth::{BcryptPasswordHasher, CredentialsAuthenticator};
pub use database::{create_pool, MySqlUserRepository};
pub use mailer::LogMailSender;

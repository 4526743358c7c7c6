//! Authentication collaborator implementations

mod authenticator;
mod password_hasher;

pub use authenticator::CredentialsAuthenticator;
pub use password_hasher::BcryptPasswordHasher;

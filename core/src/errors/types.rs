//! Error type definitions for authentication, token management, and
//! password operations. User-facing messages live on the variants; the
//! presentation layer maps each variant to an HTTP status.

use thiserror::Error;

/// Authentication-related errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AuthError {
    #[error("Username already exists")]
    UsernameAlreadyExists,

    #[error("Email already exists")]
    EmailAlreadyExists,

    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("User not found")]
    UserNotFound,

    #[error("Current password is incorrect")]
    InvalidCurrentPassword,

    #[error("Insufficient permissions")]
    InsufficientPermissions,
}

/// Token-related errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token format")]
    InvalidTokenFormat,

    #[error("Invalid signature")]
    InvalidSignature,

    #[error("Token revoked")]
    TokenRevoked,

    #[error("Invalid refresh token")]
    InvalidRefreshToken,

    #[error("Token generation failed")]
    TokenGenerationFailed,
}

/// Password-reset flow errors
///
/// The reset flow deliberately collapses every internal failure into the
/// same generic variants so a caller cannot probe which step failed.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum PasswordError {
    #[error("Invalid or expired reset token")]
    InvalidResetToken,

    #[error("Failed to reset password")]
    ResetFailed,
}

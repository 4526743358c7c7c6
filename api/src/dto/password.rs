//! Password-management request/response DTOs

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request a password-reset token
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ForgotPasswordRequest {
    #[validate(email(message = "Email must be valid"))]
    pub email: String,
}

/// Reset a password with a previously issued token
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ResetPasswordRequest {
    #[validate(length(min = 1, message = "Reset token is required"))]
    pub reset_token: String,

    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub new_password: String,
}

/// Change the password of the authenticated user
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ChangePasswordRequest {
    #[validate(length(min = 1, message = "Current password is required"))]
    pub current_password: String,

    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub new_password: String,
}

/// Force a password change for any user (admin only)
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ForcePasswordChangeRequest {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,

    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub new_password: String,
}

/// Result of a reset-token validity probe
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateResetTokenResponse {
    pub valid: bool,
    pub message: String,
}

/// Query parameters of the validate endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct ValidateResetTokenQuery {
    pub token: String,
}

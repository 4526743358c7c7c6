//! Authentication request/response DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use cs_core::domain::entities::user::{Role, User};
use cs_core::domain::value_objects::AuthResponse as DomainAuthResponse;

/// User registration request
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Unique username
    #[validate(length(min = 3, max = 50, message = "Username must be between 3 and 50 characters"))]
    pub username: String,

    /// User's email address
    #[validate(email(message = "Email must be valid"))]
    pub email: String,

    /// User's password
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,

    /// User's first name
    #[validate(length(min = 1, message = "First name is required"))]
    pub first_name: String,

    /// User's last name
    #[validate(length(min = 1, message = "Last name is required"))]
    pub last_name: String,
}

/// Authentication request for login
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AuthRequest {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Token refresh request
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RefreshTokenRequest {
    #[validate(length(min = 1, message = "Refresh token is required"))]
    pub refresh_token: String,
}

/// Authentication response containing JWT tokens and user info
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponseDto {
    /// JWT access token
    pub token: String,
    /// JWT refresh token
    pub refresh_token: String,
    /// User's username
    pub username: String,
    /// User's email
    pub email: String,
    /// User's role
    pub role: Role,
    /// Access token expiration time in seconds
    pub expires_in: i64,
    /// When the response was generated
    pub timestamp: DateTime<Utc>,
}

impl From<DomainAuthResponse> for AuthResponseDto {
    fn from(response: DomainAuthResponse) -> Self {
        Self {
            token: response.token,
            refresh_token: response.refresh_token,
            username: response.username,
            email: response.email,
            role: response.role,
            expires_in: response.expires_in,
            timestamp: Utc::now(),
        }
    }
}

/// Logout confirmation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogoutResponse {
    pub message: String,
}

/// Profile information of the authenticated user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfileResponse {
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserProfileResponse {
    fn from(user: User) -> Self {
        Self {
            username: user.username,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            role: user.role,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

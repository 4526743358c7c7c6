//! Authentication response value object

use serde::{Deserialize, Serialize};

use crate::domain::entities::token::TokenPair;
use crate::domain::entities::user::{Role, User};

/// Result of a successful register/login/refresh operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    /// JWT access token
    pub token: String,

    /// JWT refresh token
    pub refresh_token: String,

    /// Username the tokens were issued for
    pub username: String,

    /// Email of the user
    pub email: String,

    /// Role of the user
    pub role: Role,

    /// Access token lifetime in seconds
    pub expires_in: i64,
}

impl AuthResponse {
    /// Builds a response from a freshly issued token pair and its user
    pub fn from_token_pair(pair: TokenPair, user: &User) -> Self {
        Self {
            token: pair.access_token,
            refresh_token: pair.refresh_token,
            username: user.username.clone(),
            email: user.email.clone(),
            role: user.role,
            expires_in: pair.expires_in,
        }
    }
}

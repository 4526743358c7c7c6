//! Token types for JWT-based authentication.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::user::User;

/// JWT issuer claim value
pub const JWT_ISSUER: &str = "contact-search-app";

/// JWT audience claim value
pub const JWT_AUDIENCE: &str = "contact-search-users";

/// Claims structure for the JWT payload
///
/// Both access and refresh tokens share this shape; they differ only in
/// their lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (username)
    pub sub: String,

    /// Issued at timestamp (seconds since epoch)
    pub iat: i64,

    /// Expiration timestamp (seconds since epoch)
    pub exp: i64,

    /// Not before timestamp
    pub nbf: i64,

    /// Issuer
    pub iss: String,

    /// Audience
    pub aud: String,

    /// JWT ID, unique per issued token
    pub jti: String,

    /// Role name of the subject
    pub role: String,

    /// Email of the subject
    pub email: String,

    /// First name of the subject
    pub first_name: String,

    /// Last name of the subject
    pub last_name: String,
}

impl Claims {
    /// Creates claims for the given user with the given lifetime
    ///
    /// A fresh random `jti` is generated on every call, so two tokens
    /// issued at the same instant for the same user remain distinguishable
    /// and independently revocable.
    pub fn for_user(user: &User, ttl_ms: i64) -> Self {
        let now_ms = Utc::now().timestamp_millis();
        Self {
            sub: user.username.clone(),
            iat: now_ms / 1000,
            exp: (now_ms + ttl_ms) / 1000,
            nbf: now_ms / 1000,
            iss: JWT_ISSUER.to_string(),
            aud: JWT_AUDIENCE.to_string(),
            jti: Uuid::new_v4().to_string(),
            role: user.role.to_string(),
            email: user.email.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
        }
    }

    /// Expiry expressed in epoch milliseconds, as stored in the blacklist
    pub fn expiry_millis(&self) -> i64 {
        self.exp * 1000
    }

    /// Checks whether the claims have expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }
}

/// Access/refresh token pair returned to the client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    /// JWT access token
    pub access_token: String,

    /// JWT refresh token
    pub refresh_token: String,

    /// Access token lifetime in seconds
    pub expires_in: i64,
}

impl TokenPair {
    /// Creates a new token pair
    pub fn new(access_token: String, refresh_token: String, expires_in: i64) -> Self {
        Self {
            access_token,
            refresh_token,
            expires_in,
        }
    }
}

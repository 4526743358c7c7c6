//! Authentication and authorization configuration

use serde::{Deserialize, Serialize};

/// JWT authentication configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// JWT secret key for signing tokens
    pub secret: String,

    /// Access token expiry time in milliseconds
    pub access_token_expiry_ms: i64,

    /// Refresh token expiry time in milliseconds
    pub refresh_token_expiry_ms: i64,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::from("development-secret-please-change-in-production"),
            access_token_expiry_ms: 86_400_000,   // 24 hours
            refresh_token_expiry_ms: 604_800_000, // 7 days
        }
    }
}

impl JwtConfig {
    /// Create a new JWT configuration with secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Create from environment variables
    ///
    /// Reads `JWT_SECRET`, `JWT_ACCESS_TOKEN_EXPIRY_MS` and
    /// `JWT_REFRESH_TOKEN_EXPIRY_MS`, falling back to defaults when unset
    /// or unparsable.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let secret = std::env::var("JWT_SECRET").unwrap_or(defaults.secret);
        let access_token_expiry_ms = std::env::var("JWT_ACCESS_TOKEN_EXPIRY_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.access_token_expiry_ms);
        let refresh_token_expiry_ms = std::env::var("JWT_REFRESH_TOKEN_EXPIRY_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.refresh_token_expiry_ms);

        Self {
            secret,
            access_token_expiry_ms,
            refresh_token_expiry_ms,
        }
    }

    /// Check if using default secret (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.secret == "development-secret-please-change-in-production"
    }

    /// Access token expiry expressed in seconds, as reported to clients
    pub fn access_token_expiry_seconds(&self) -> i64 {
        self.access_token_expiry_ms / 1000
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jwt_config_default() {
        let config = JwtConfig::default();
        assert_eq!(config.access_token_expiry_ms, 86_400_000);
        assert_eq!(config.refresh_token_expiry_ms, 604_800_000);
        assert!(config.is_using_default_secret());
    }

    #[test]
    fn test_expiry_in_seconds() {
        let config = JwtConfig::default();
        assert_eq!(config.access_token_expiry_seconds(), 86_400);
    }

    #[test]
    fn test_custom_secret() {
        let config = JwtConfig::new("my-secret");
        assert!(!config.is_using_default_secret());
    }
}

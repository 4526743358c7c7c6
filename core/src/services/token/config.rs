//! Configuration for the token service

use cs_shared::config::JwtConfig;

/// Configuration for the token service
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// JWT signing secret (HS256, single static key)
    pub jwt_secret: String,
    /// Access token expiry in milliseconds
    pub access_token_expiry_ms: i64,
    /// Refresh token expiry in milliseconds
    pub refresh_token_expiry_ms: i64,
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self {
            jwt_secret: "development-secret-please-change-in-production".to_string(),
            access_token_expiry_ms: 86_400_000,   // 24 hours
            refresh_token_expiry_ms: 604_800_000, // 7 days
        }
    }
}

impl From<JwtConfig> for TokenServiceConfig {
    fn from(config: JwtConfig) -> Self {
        Self {
            jwt_secret: config.secret,
            access_token_expiry_ms: config.access_token_expiry_ms,
            refresh_token_expiry_ms: config.refresh_token_expiry_ms,
        }
    }
}

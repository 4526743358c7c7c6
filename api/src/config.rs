//! Application configuration assembled from the environment

use cs_core::services::cleanup::CleanupConfig;
use cs_shared::config::{DatabaseConfig, Environment, JwtConfig, ServerConfig};

/// Complete API process configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub jwt: JwtConfig,
    pub cleanup: CleanupConfig,
    pub environment: Environment,
}

impl Config {
    /// Load every section from environment variables
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            database: DatabaseConfig::from_env(),
            jwt: JwtConfig::from_env(),
            cleanup: CleanupConfig::from_env(),
            environment: Environment::from_env(),
        }
    }

    pub fn is_development(&self) -> bool {
        self.environment.is_development()
    }

    pub fn is_production(&self) -> bool {
        self.environment.is_production()
    }
}

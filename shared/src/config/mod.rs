//! Configuration module with business-specific sub-modules
//!
//! Configuration is organized into logical areas:
//! - `auth` - JWT signing and token lifetime configuration
//! - `database` - Database connection and pool configuration
//! - `environment` - Environment detection
//! - `server` - HTTP server bind configuration

pub mod auth;
pub mod database;
pub mod environment;
pub mod server;

// Re-export commonly used types
pub use auth::JwtConfig;
pub use database::DatabaseConfig;
pub use environment::Environment;
pub use server::ServerConfig;

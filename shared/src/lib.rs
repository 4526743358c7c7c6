//! Shared utilities and common types for the Contact Search backend
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types loaded from the environment
//! - Response structures shared by the API layer

pub mod config;
pub mod types;

// Re-export commonly used items at crate root
pub use config::{DatabaseConfig, Environment, JwtConfig, ServerConfig};
pub use types::{ErrorResponse, MessageResponse};

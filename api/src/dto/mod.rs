//! Request and response DTOs for the HTTP surface

pub mod auth;
pub mod password;

// The error envelope is shared across crates
pub use cs_shared::types::response::{ErrorResponse, MessageResponse};

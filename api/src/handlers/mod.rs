//! Request handling helpers

pub mod error;

pub use error::{handle_domain_error, handle_validation_errors};

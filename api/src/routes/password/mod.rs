//! Password management route handlers
//!
//! This module contains the password lifecycle endpoints:
//! - Forgot password (reset-token issuance)
//! - Reset password with a token
//! - Change password (authenticated)
//! - Force password change (admin)
//! - Reset-token validity probe

pub mod change;
pub mod force_change;
pub mod forgot;
pub mod reset;
pub mod validate;

//! Authentication route handlers
//!
//! This module contains all authentication-related endpoints:
//! - User registration and login
//! - Token refresh
//! - Logout
//! - Current-user profile

pub mod login;
pub mod logout;
pub mod profile;
pub mod refresh;
pub mod register;

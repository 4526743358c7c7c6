//! HTTP surface of the Contact Search backend
//!
//! Exposes the authentication and password-management endpoints over
//! actix-web, wired against the services in `cs_core`.

pub mod app;
pub mod config;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;

//! HTTP API for the Chairside ratings service.
//!
//! The binary entrypoint lives in `main.rs`; everything else is exported
//! here so integration tests can assemble the exact same application via
//! [`router::build_app_router`].

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;

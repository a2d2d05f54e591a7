//! HTTP request handlers.
//!
//! Handlers validate input via `chairside_core`, check referenced entities
//! exist, delegate persistence to the `chairside_db` repositories, and map
//! failures through [`crate::error::AppError`].

pub mod rating;

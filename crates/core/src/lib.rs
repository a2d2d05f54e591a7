//! Core domain logic for the Chairside ratings service.
//!
//! This crate is pure: no database handles, no HTTP types, no I/O. It holds
//! the validation rules for rating submissions and listing queries, the
//! pagination math, and the statistics aggregation, so the same rules can be
//! exercised from unit tests without standing up a server.

pub mod error;
pub mod pagination;
pub mod rating;
pub mod stats;
pub mod types;

pub use error::CoreError;
pub use types::{DbId, Timestamp};

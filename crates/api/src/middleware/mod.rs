//! Request middleware.
//!
//! - [`auth::AuthUser`] -- extractor for the authenticated caller.

pub mod auth;

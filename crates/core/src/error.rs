//! Domain error type shared across the workspace.

use thiserror::Error;

/// Errors produced by domain logic.
///
/// The API layer maps each variant onto an HTTP status code and a stable
/// machine-readable error code.
#[derive(Debug, Error)]
pub enum CoreError {
    /// An entity referenced by the request does not exist.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: String },

    /// Input failed one or more validation rules. Every violated rule is
    /// listed, not just the first.
    #[error("Validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),

    /// A uniqueness guarantee was violated.
    #[error("Conflict: {0}")]
    Conflict(String),

    /// The caller is not authenticated.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Something went wrong that the caller cannot fix.
    #[error("Internal error: {0}")]
    Internal(String),
}

//! User rows. Users are the authors of ratings.

use chairside_core::{DbId, Timestamp};
use serde::{Deserialize, Serialize};

/// A registered user. `uid` is the opaque key issued by the identity
/// provider; everything rating-related hangs off it.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct User {
    pub id: DbId,
    pub uid: String,
    pub display_name: Option<String>,
    pub phone: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Payload for registering a user.
#[derive(Debug, Deserialize)]
pub struct CreateUser {
    pub uid: String,
    pub display_name: Option<String>,
    pub phone: Option<String>,
}

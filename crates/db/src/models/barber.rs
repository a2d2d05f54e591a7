//! Barber rows. Barbers are the subjects of ratings.

use chairside_core::{DbId, Timestamp};
use serde::{Deserialize, Serialize};

/// A barber profile, keyed by the identity provider's opaque `uid`.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Barber {
    pub id: DbId,
    pub uid: String,
    pub display_name: String,
    pub shop_name: Option<String>,
    pub phone: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Payload for registering a barber.
#[derive(Debug, Deserialize)]
pub struct CreateBarber {
    pub uid: String,
    pub display_name: String,
    pub shop_name: Option<String>,
    pub phone: Option<String>,
}

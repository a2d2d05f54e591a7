//! Rating rows and their write payloads.

use chairside_core::rating::ServiceDetails;
use chairside_core::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;

/// A stored rating. One row per (user, barber) pair.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Rating {
    pub id: DbId,
    pub user_uid: String,
    pub barber_uid: String,
    pub score: i16,
    pub review_text: Option<String>,
    pub service_details: Option<Json<ServiceDetails>>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Request body for submitting a rating.
///
/// `score` stays wide and optional here; submission validation narrows it
/// and reports a missing or out-of-range value alongside any other
/// violations.
#[derive(Debug, Deserialize)]
pub struct CreateRating {
    pub barber_uid: String,
    pub score: Option<i64>,
    pub review_text: Option<String>,
    pub service_details: Option<ServiceDetails>,
}

/// Request body for updating an existing rating. All fields optional,
/// but at least one must be present.
#[derive(Debug, Deserialize)]
pub struct UpdateRating {
    pub score: Option<i64>,
    pub review_text: Option<String>,
    pub service_details: Option<ServiceDetails>,
}

/// A validated, normalized rating ready to be written.
#[derive(Debug, Clone)]
pub struct NewRating {
    pub user_uid: String,
    pub barber_uid: String,
    pub score: i16,
    pub review_text: Option<String>,
    pub service_details: Option<Json<ServiceDetails>>,
}

/// Partial changes to an existing rating.
///
/// `review_text` distinguishes "leave untouched" (`None`) from "clear the
/// stored review" (`Some(None)`).
#[derive(Debug, Clone, Default)]
pub struct RatingChanges {
    pub score: Option<i16>,
    pub review_text: Option<Option<String>>,
    pub service_details: Option<Json<ServiceDetails>>,
}

/// One bucket of the grouped score aggregate.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ScoreCount {
    pub score: i16,
    pub count: i64,
}

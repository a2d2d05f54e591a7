//! Handlers for the ratings resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use sqlx::types::Json as DbJson;

use chairside_core::error::CoreError;
use chairside_core::pagination::Pagination;
use chairside_core::rating::{self, RatingQueryParams};
use chairside_core::stats::RatingStatistics;
use chairside_db::models::{CreateRating, NewRating, Rating, RatingChanges, UpdateRating};
use chairside_db::repositories::{BarberRepo, RatingRepo, UserRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Response body for a barber's ratings listing.
///
/// Statistics are computed over the same filtered set as `ratings`, so a
/// score-bounded listing never reports counts for ratings it excludes.
#[derive(Debug, Serialize)]
pub struct BarberRatingsPage {
    pub ratings: Vec<Rating>,
    pub pagination: Pagination,
    pub statistics: RatingStatistics,
}

/// Response body for the caller's own ratings listing.
#[derive(Debug, Serialize)]
pub struct UserRatingsPage {
    pub ratings: Vec<Rating>,
    pub pagination: Pagination,
}

/// POST /ratings
///
/// Create the caller's rating for a barber, or replace it when one already
/// exists. Returns 201 with the stored rating either way.
pub async fn submit(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateRating>,
) -> AppResult<impl IntoResponse> {
    let score = rating::validate_submit(
        &auth.user_uid,
        &input.barber_uid,
        input.score,
        input.review_text.as_deref(),
        input.service_details.as_ref(),
    )
    .map_err(CoreError::Validation)?;

    BarberRepo::find_by_uid(&state.pool, &input.barber_uid)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Barber",
                id: input.barber_uid.clone(),
            })
        })?;

    UserRepo::find_by_uid(&state.pool, &auth.user_uid)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "User",
                id: auth.user_uid.clone(),
            })
        })?;

    let review_text = input
        .review_text
        .as_deref()
        .and_then(rating::normalize_review_text);
    let new_rating = NewRating {
        user_uid: auth.user_uid,
        barber_uid: input.barber_uid,
        score,
        review_text,
        service_details: input.service_details.map(DbJson),
    };

    let stored = RatingRepo::upsert(&state.pool, &new_rating).await?;

    tracing::info!(
        user_uid = %stored.user_uid,
        barber_uid = %stored.barber_uid,
        score = stored.score,
        "Rating submitted"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: stored })))
}

/// GET /barbers/{barber_uid}/ratings
///
/// Public listing of a barber's ratings: paginated, optionally bounded by
/// score, sortable by score or timestamps, with aggregate statistics over
/// the same filtered set.
pub async fn list_for_barber(
    State(state): State<AppState>,
    Path(barber_uid): Path<String>,
    Query(params): Query<RatingQueryParams>,
) -> AppResult<impl IntoResponse> {
    let query = rating::validate_query_params(&params).map_err(CoreError::Validation)?;

    BarberRepo::find_by_uid(&state.pool, &barber_uid)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Barber",
                id: barber_uid.clone(),
            })
        })?;

    let ratings = RatingRepo::list_for_barber(&state.pool, &barber_uid, &query).await?;
    let total = RatingRepo::count_for_barber(&state.pool, &barber_uid, &query).await?;
    let counts = RatingRepo::score_counts_for_barber(&state.pool, &barber_uid, &query).await?;

    let pairs: Vec<(i16, i64)> = counts.iter().map(|c| (c.score, c.count)).collect();
    let page = BarberRatingsPage {
        ratings,
        pagination: Pagination::new(query.page, query.limit, total),
        statistics: RatingStatistics::from_score_counts(&pairs),
    };

    Ok(Json(DataResponse { data: page }))
}

/// GET /barbers/{barber_uid}/ratings/{user_uid}
///
/// Fetch the single rating `user_uid` holds for `barber_uid`.
pub async fn get_by_key(
    State(state): State<AppState>,
    Path((barber_uid, user_uid)): Path<(String, String)>,
) -> AppResult<impl IntoResponse> {
    let found = RatingRepo::find_by_key(&state.pool, &user_uid, &barber_uid)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Rating",
                id: format!("{barber_uid}/{user_uid}"),
            })
        })?;

    Ok(Json(DataResponse { data: found }))
}

/// GET /ratings/mine
///
/// The caller's own ratings across all barbers, paginated and sortable.
pub async fn list_mine(
    auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<RatingQueryParams>,
) -> AppResult<impl IntoResponse> {
    // Score bounds are not part of this listing; drop them before validation.
    let params = RatingQueryParams {
        min_score: None,
        max_score: None,
        ..params
    };
    let query = rating::validate_query_params(&params).map_err(CoreError::Validation)?;

    let ratings = RatingRepo::list_for_user(&state.pool, &auth.user_uid, &query).await?;
    let total = RatingRepo::count_for_user(&state.pool, &auth.user_uid).await?;

    let page = UserRatingsPage {
        ratings,
        pagination: Pagination::new(query.page, query.limit, total),
    };

    Ok(Json(DataResponse { data: page }))
}

/// PUT /barbers/{barber_uid}/ratings
///
/// Partially update the caller's existing rating for a barber. Absent
/// fields keep their stored values; this never creates a rating.
pub async fn update(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(barber_uid): Path<String>,
    Json(input): Json<UpdateRating>,
) -> AppResult<impl IntoResponse> {
    rating::validate_update(
        input.score,
        input.review_text.as_deref(),
        input.service_details.as_ref(),
    )
    .map_err(CoreError::Validation)?;

    let changes = RatingChanges {
        score: input.score.map(|s| s as i16),
        review_text: input
            .review_text
            .as_deref()
            .map(rating::normalize_review_text),
        service_details: input.service_details.map(DbJson),
    };

    let updated = RatingRepo::update(&state.pool, &auth.user_uid, &barber_uid, &changes)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Rating",
                id: format!("{barber_uid}/{}", auth.user_uid),
            })
        })?;

    tracing::info!(
        user_uid = %updated.user_uid,
        barber_uid = %updated.barber_uid,
        "Rating updated"
    );

    Ok(Json(DataResponse { data: updated }))
}

/// DELETE /barbers/{barber_uid}/ratings
///
/// Delete the caller's rating for a barber, returning the removed record.
pub async fn delete(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(barber_uid): Path<String>,
) -> AppResult<impl IntoResponse> {
    let removed = RatingRepo::delete_by_key(&state.pool, &auth.user_uid, &barber_uid)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Rating",
                id: format!("{barber_uid}/{}", auth.user_uid),
            })
        })?;

    tracing::info!(
        user_uid = %removed.user_uid,
        barber_uid = %removed.barber_uid,
        "Rating deleted"
    );

    Ok(Json(DataResponse { data: removed }))
}

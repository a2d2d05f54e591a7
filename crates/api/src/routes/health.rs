//! Service health probe. Mounted at the root, not under `/api/v1`, so
//! load balancers reach it without a versioned path.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Body returned by `GET /health`.
#[derive(Serialize)]
pub struct HealthResponse {
    /// `"ok"` when every dependency responds, `"degraded"` otherwise.
    pub status: &'static str,
    /// Version of the running binary.
    pub version: &'static str,
    /// Result of the database round trip.
    pub db_healthy: bool,
}

/// GET /health
///
/// Always answers 200; a failing dependency shows up in the body, not the
/// status code.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = chairside_db::health_check(&state.pool).await.is_ok();

    Json(HealthResponse {
        status: if db_healthy { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}

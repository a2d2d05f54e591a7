use axum::routing::{get, post};
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Routes mounted at `/ratings` (caller-scoped).
///
/// ```text
/// POST /          submit or replace the caller's rating (auth)
/// GET  /mine      list the caller's ratings             (auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(handlers::rating::submit))
        .route("/mine", get(handlers::rating::list_mine))
}

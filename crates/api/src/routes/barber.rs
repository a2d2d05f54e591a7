use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Routes mounted at `/barbers` (barber-scoped ratings).
///
/// ```text
/// GET    /{barber_uid}/ratings             listing + statistics   (public)
/// PUT    /{barber_uid}/ratings             update caller's rating (auth)
/// DELETE /{barber_uid}/ratings             delete caller's rating (auth)
/// GET    /{barber_uid}/ratings/{user_uid}  one rating by key      (public)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/{barber_uid}/ratings",
            get(handlers::rating::list_for_barber)
                .put(handlers::rating::update)
                .delete(handlers::rating::delete),
        )
        .route(
            "/{barber_uid}/ratings/{user_uid}",
            get(handlers::rating::get_by_key),
        )
}

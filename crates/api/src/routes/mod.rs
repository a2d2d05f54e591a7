pub mod barber;
pub mod health;
pub mod rating;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /ratings                                 submit rating (POST, auth)
/// /ratings/mine                            caller's ratings (GET, auth)
///
/// /barbers/{barber_uid}/ratings            list + statistics (GET, public)
///                                          update rating (PUT, auth)
///                                          delete rating (DELETE, auth)
/// /barbers/{barber_uid}/ratings/{user_uid} one rating by key (GET, public)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Caller-scoped rating routes (submit, own listing).
        .nest("/ratings", rating::router())
        // Barber-scoped rating routes (listing, single fetch, update, delete).
        .nest("/barbers", barber::router())
}

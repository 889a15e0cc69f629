//! API route configuration.

use crate::api::handlers::{shorten_handler, stats_handler, stats_list_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Registry routes. None of them require authentication.
///
/// # Endpoints
///
/// - `POST /shorturls`         - Create a short URL
/// - `GET  /shorturls/{code}`  - Statistics for one short code
/// - `GET  /api/all-urls`      - Statistics for every short code
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/shorturls", post(shorten_handler))
        .route("/shorturls/{code}", get(stats_handler))
        .route("/api/all-urls", get(stats_list_handler))
}

//! Handler for single short URL statistics.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::stats::StatsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Retrieves statistics for one short code.
///
/// # Endpoint
///
/// `GET /shorturls/{code}`
///
/// # Response
///
/// Returns the entry metadata, total click count and every recorded click
/// in chronological order. Expired entries are still reported.
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn stats_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<StatsResponse>, AppError> {
    let report = state.registry.stats(&code)?;

    Ok(Json(report.into()))
}

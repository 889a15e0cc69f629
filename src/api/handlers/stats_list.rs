//! Handler for statistics over all short URLs.

use axum::{Json, extract::State};

use crate::api::dto::stats::StatsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Lists statistics for every short URL ever created.
///
/// # Endpoint
///
/// `GET /api/all-urls`
///
/// Entries are returned in creation order, expired ones included.
pub async fn stats_list_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<StatsResponse>>, AppError> {
    let reports = state.registry.list_all()?;

    Ok(Json(reports.into_iter().map(StatsResponse::from).collect()))
}

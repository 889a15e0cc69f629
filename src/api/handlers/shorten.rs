//! Handler for short URL creation.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::shorten::{CreateShortUrlRequest, CreateShortUrlResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short URL.
///
/// # Endpoint
///
/// `POST /shorturls`
///
/// # Request Body
///
/// ```json
/// {
///   "url": "https://example.com/very/long/path",
///   "validity": 30,          // optional, minutes
///   "shortcode": "my-link"   // optional
/// }
/// ```
///
/// # Response
///
/// `201 Created`
///
/// ```json
/// {
///   "shortLink": "http://localhost:3001/my-link",
///   "code": "my-link",
///   "expiry": "2025-01-01T12:30:00+00:00"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request for malformed JSON, an invalid URL, a non-integer
/// or non-positive validity, or a malformed shortcode.
/// Returns 409 Conflict if the shortcode is already taken.
pub async fn shorten_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateShortUrlRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreateShortUrlResponse>), AppError> {
    let Json(request) = payload.map_err(|rejection| {
        AppError::invalid_input(
            "Invalid request body",
            json!({ "reason": rejection.body_text() }),
        )
    })?;

    request.validate()?;

    let new_entry = request.into_new_entry().inspect_err(|_| {
        state
            .telemetry()
            .error("controller", "Invalid validity period");
    })?;

    let entry = state.registry.create(new_entry)?;

    Ok((
        StatusCode::CREATED,
        Json(CreateShortUrlResponse::new(&state.base_url, &entry)),
    ))
}

//! Handler for short URL redirect.

use axum::{
    extract::{ConnectInfo, Path, State},
    http::HeaderMap,
    response::{IntoResponse, Redirect},
};
use std::net::SocketAddr;

use crate::error::AppError;
use crate::state::AppState;
use crate::utils::request_context::extract_request_context;

/// Redirects a short code to its target URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Request Flow
///
/// 1. Build the request context (`User-Agent`, `Referer`, client address)
/// 2. Resolve the code, which records the access event
/// 3. Return 307 Temporary Redirect
///
/// Codes are case-insensitive.
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
/// Returns 410 Gone if the short link has expired.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
    headers: HeaderMap,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
) -> Result<impl IntoResponse, AppError> {
    let context = extract_request_context(&headers, Some(addr.ip()), state.behind_proxy);

    let target_url = state.registry.resolve(&code, context)?;

    Ok(Redirect::temporary(&target_url))
}

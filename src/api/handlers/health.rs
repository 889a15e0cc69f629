//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};
use chrono::Utc;

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: Telemetry queue accepting events
/// - **503 Service Unavailable**: Telemetry worker has stopped
///
/// # Response
///
/// ```json
/// {
///   "status": "OK",
///   "timestamp": "2025-01-01T12:00:00Z",
///   "uptime_seconds": 42,
///   "version": "0.1.0",
///   "checks": {
///     "telemetry_queue": { "status": "ok", "message": "Capacity: 1000" }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let queue_check = check_telemetry_queue(&state);
    let healthy = queue_check.status == "ok";

    let response = HealthResponse {
        status: if healthy { "OK" } else { "DEGRADED" }.to_string(),
        timestamp: Utc::now(),
        uptime_seconds: state.started_at.elapsed().as_secs(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            telemetry_queue: queue_check,
        },
    };

    if healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Checks whether the telemetry worker is still receiving events.
fn check_telemetry_queue(state: &AppState) -> CheckStatus {
    let telemetry = state.telemetry();

    if telemetry.is_closed() {
        CheckStatus {
            status: "error".to_string(),
            message: Some("Telemetry queue is closed".to_string()),
        }
    } else {
        CheckStatus {
            status: "ok".to_string(),
            message: Some(format!("Capacity: {}", telemetry.capacity())),
        }
    }
}

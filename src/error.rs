//! Application error type shared by the registry and the HTTP layer.
//!
//! Every failure the registry can report maps to exactly one variant, and
//! every variant maps to a distinct HTTP status:
//!
//! | Variant           | Status | Code             |
//! |-------------------|--------|------------------|
//! | `InvalidInput`    | 400    | `invalid_input`  |
//! | `CodeCollision`   | 409    | `code_collision` |
//! | `NotFound`        | 404    | `not_found`      |
//! | `Expired`         | 410    | `expired`        |
//! | `Internal`        | 500    | `internal_error` |

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};
use validator::ValidationErrors;

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Machine-readable error payload returned inside `{"error": ...}`.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    InvalidInput { message: String, details: Value },
    #[error("{message}")]
    CodeCollision { message: String, details: Value },
    #[error("{message}")]
    NotFound { message: String, details: Value },
    #[error("{message}")]
    Expired { message: String, details: Value },
    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn invalid_input(message: impl Into<String>, details: Value) -> Self {
        Self::InvalidInput {
            message: message.into(),
            details,
        }
    }
    pub fn code_collision(message: impl Into<String>, details: Value) -> Self {
        Self::CodeCollision {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn expired(message: impl Into<String>, details: Value) -> Self {
        Self::Expired {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// Stable identifier exposed to API clients.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::InvalidInput { .. } => "invalid_input",
            AppError::CodeCollision { .. } => "code_collision",
            AppError::NotFound { .. } => "not_found",
            AppError::Expired { .. } => "expired",
            AppError::Internal { .. } => "internal_error",
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            AppError::CodeCollision { .. } => StatusCode::CONFLICT,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Expired { .. } => StatusCode::GONE,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Builds the serializable payload without consuming the error.
    pub fn to_error_info(&self) -> ErrorInfo {
        let (message, details) = match self {
            AppError::InvalidInput { message, details }
            | AppError::CodeCollision { message, details }
            | AppError::NotFound { message, details }
            | AppError::Expired { message, details }
            | AppError::Internal { message, details } => (message, details),
        };

        ErrorInfo {
            code: self.code(),
            message: message.clone(),
            details: details.clone(),
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let details = serde_json::to_value(&errors).unwrap_or_else(|_| json!({}));
        AppError::invalid_input("Request validation failed", details)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let info = self.to_error_info();

        if let AppError::Internal { .. } = self {
            tracing::error!(message = %info.message, details = %info.details, "Internal error");
        }

        (status, Json(ErrorBody { error: info })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes_are_distinct() {
        let errors = [
            AppError::invalid_input("bad", json!({})),
            AppError::code_collision("taken", json!({})),
            AppError::not_found("missing", json!({})),
            AppError::expired("gone", json!({})),
            AppError::internal("boom", json!({})),
        ];

        let statuses: std::collections::HashSet<_> =
            errors.iter().map(|e| e.status_code()).collect();

        assert_eq!(statuses.len(), errors.len());
    }

    #[test]
    fn test_expired_maps_to_gone() {
        let err = AppError::expired("Short URL has expired", json!({ "code": "abc123" }));
        assert_eq!(err.status_code(), StatusCode::GONE);
        assert_eq!(err.code(), "expired");
    }

    #[test]
    fn test_display_uses_message() {
        let err = AppError::code_collision("Shortcode already exists", json!({}));
        assert_eq!(err.to_string(), "Shortcode already exists");
    }

    #[test]
    fn test_to_error_info_keeps_details() {
        let err = AppError::not_found("Short URL not found", json!({ "code": "zzz" }));
        let info = err.to_error_info();

        assert_eq!(info.code, "not_found");
        assert_eq!(info.message, "Short URL not found");
        assert_eq!(info.details["code"], "zzz");
    }

    #[test]
    fn test_into_response_status() {
        let response = AppError::invalid_input("Invalid URL format", json!({})).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = AppError::internal("boom", json!({})).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}

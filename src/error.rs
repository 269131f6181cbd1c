//! HTTP-facing error type.
//!
//! Every failure leaves the service as
//! `{"error": {"code": ..., "message": ..., "details": ...}}` with a matching
//! status code.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

use crate::domain::repositories::StoreError;

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Machine-readable error payload.
#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    Validation { message: String, details: Value },
    #[error("{message}")]
    NotFound { message: String, details: Value },
    #[error("{message}")]
    Conflict { message: String, details: Value },
    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
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
    pub fn conflict(message: impl Into<String>, details: Value) -> Self {
        Self::Conflict {
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

    /// Returns the HTTP status this error is reported with.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Conflict { .. } => StatusCode::CONFLICT,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Converts the error into its response payload.
    pub fn into_error_info(self) -> ErrorInfo {
        let (code, message, details) = match self {
            AppError::Validation { message, details } => ("validation_error", message, details),
            AppError::NotFound { message, details } => ("not_found", message, details),
            AppError::Conflict { message, details } => ("conflict", message, details),
            AppError::Internal { message, details } => ("internal_error", message, details),
        };

        ErrorInfo {
            code,
            message,
            details,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody {
            error: self.into_error_info(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::DuplicateUrl(long_url) => AppError::conflict(
                "This URL has already been shortened",
                json!({ "long_url": long_url }),
            ),
            StoreError::AliasNotFound(token) => {
                AppError::not_found("Short URL not found", json!({ "token": token }))
            }
            StoreError::AliasCollision(alias) => AppError::internal(
                "Generated alias collided with an existing one",
                json!({ "short_url": alias }),
            ),
            StoreError::BackendUnavailable(_) => {
                AppError::internal("Storage backend unavailable", json!({}))
            }
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::bad_request(
            "Invalid request body",
            json!({ "reason": rejection.body_text() }),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_url_maps_to_conflict() {
        let err = AppError::from(StoreError::DuplicateUrl("https://example.com".into()));
        assert_eq!(err.status(), StatusCode::CONFLICT);
        assert_eq!(err.into_error_info().code, "conflict");
    }

    #[test]
    fn test_alias_not_found_maps_to_404() {
        let err = AppError::from(StoreError::AliasNotFound("zzzzzzzzzz".into()));
        assert_eq!(err.status(), StatusCode::NOT_FOUND);

        let info = err.into_error_info();
        assert_eq!(info.code, "not_found");
        assert_eq!(info.details["token"], "zzzzzzzzzz");
    }

    #[test]
    fn test_backend_failures_map_to_500() {
        for e in [
            StoreError::BackendUnavailable("connection refused".into()),
            StoreError::AliasCollision("https://aaaaaaaaaa.com".into()),
        ] {
            assert_eq!(AppError::from(e).status(), StatusCode::INTERNAL_SERVER_ERROR);
        }
    }

    #[test]
    fn test_backend_details_are_not_leaked() {
        let err = AppError::from(StoreError::BackendUnavailable(
            "password authentication failed for user".into(),
        ));
        let info = err.into_error_info();
        assert!(!info.message.contains("password"));
        assert_eq!(info.details, json!({}));
    }

    #[test]
    fn test_display_uses_message() {
        let err = AppError::bad_request("Invalid request body", json!({}));
        assert_eq!(err.to_string(), "Invalid request body");
    }
}

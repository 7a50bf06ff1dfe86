use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use moviecat_core::error::CoreError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds request-parsing failures.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `moviecat_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Core(core) => classify_core_error(core),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Classify a domain error into an HTTP status, error code, and message.
///
/// Rejected input maps to 400, a missing movie to 404, a title clash to
/// 409. Storage failures map to 500 with a sanitized message.
fn classify_core_error(err: &CoreError) -> (StatusCode, &'static str, String) {
    match err {
        CoreError::InvalidRating(_) => (StatusCode::BAD_REQUEST, "INVALID_RATING", err.to_string()),
        CoreError::MissingTitle => (StatusCode::BAD_REQUEST, "MISSING_TITLE", err.to_string()),
        CoreError::UnknownTitle(_) => (StatusCode::BAD_REQUEST, "UNKNOWN_TITLE", err.to_string()),
        CoreError::MissingDirector | CoreError::EmptyTitleList => {
            (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", err.to_string())
        }
        CoreError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND", err.to_string()),
        CoreError::DuplicateTitle(_) => (StatusCode::CONFLICT, "CONFLICT", err.to_string()),
        CoreError::Storage(store_err) => {
            tracing::error!(error = %store_err, "Storage error");
            internal_error()
        }
    }
}

fn internal_error() -> (StatusCode, &'static str, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        "An internal error occurred".to_string(),
    )
}

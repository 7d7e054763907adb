use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use smashlore_core::error::{CoreError, ValidationError};
use smashlore_db::error::StoreError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and [`StoreError`] for repository
/// errors, and adds HTTP-specific variants. Implements [`IntoResponse`] to
/// produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `smashlore_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A repository error from `smashlore_db`.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::Core(CoreError::Validation(err))
    }
}

/// A body that is not JSON, or has a field of the wrong type, is a bad
/// request rather than axum's plain-text rejection.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, lookup } => (
                    StatusCode::NOT_FOUND,
                    json!({
                        "error": format!("{entity} with {lookup} not found"),
                        "code": "NOT_FOUND",
                    }),
                ),
                CoreError::Validation(err) => (
                    StatusCode::BAD_REQUEST,
                    json!({
                        "error": err.to_string(),
                        "code": "VALIDATION_ERROR",
                        "field": err.field,
                        "rule": err.rule.code(),
                    }),
                ),
            },

            // --- Repository errors ---
            AppError::Store(err) => classify_store_error(err),

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                json!({ "error": msg, "code": "BAD_REQUEST" }),
            ),
        };

        (status, axum::Json(body)).into_response()
    }
}

/// Classify a repository error into an HTTP status and JSON body.
///
/// - Unique constraint violations map to 409.
/// - Everything else maps to 500 with a sanitized message.
fn classify_store_error(err: &StoreError) -> (StatusCode, serde_json::Value) {
    match err {
        StoreError::Conflict { message, .. } => (
            StatusCode::CONFLICT,
            json!({ "error": message, "code": "CONFLICT" }),
        ),
        StoreError::Hydration { .. } | StoreError::Database(_) => {
            tracing::error!(error = %err, "Storage error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({
                    "error": "An internal error occurred",
                    "code": "INTERNAL_ERROR",
                }),
            )
        }
    }
}

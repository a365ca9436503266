use axum::extract::multipart::MultipartRejection;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use gapply_ai::ProviderError;
use gapply_core::error::CoreError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors, [`sqlx::Error`] for the store, and
/// [`ProviderError`] for the assistant providers. Implements [`IntoResponse`]
/// to produce the `{ "ok": false, "error", "code" }` envelope.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `gapply_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx (including errors raised by stored procedures).
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A failure talking to a chat, speech, or avatar provider.
    #[error(transparent)]
    Provider(#[from] ProviderError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<MultipartRejection> for AppError {
    fn from(rejection: MultipartRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::InvalidIdentifier { .. } => {
                    (StatusCode::BAD_REQUEST, "INVALID_IDENTIFIER", core.to_string())
                }
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::Conflict(msg) => (StatusCode::CONFLICT, "CONFLICT", msg.clone()),
                CoreError::Unauthorized(msg) => {
                    (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg.clone())
                }
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INTERNAL_ERROR",
                        "An internal error occurred".to_string(),
                    )
                }
            },

            // --- Store errors ---
            AppError::Database(err) => classify_sqlx_error(err),

            // --- Provider errors ---
            AppError::Provider(err) => classify_provider_error(err),

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = json!({
            "ok": false,
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Classify a sqlx error into an HTTP status, error code, and message.
///
/// The database owns every business rule, so its messages are passed through:
///
/// - `RowNotFound` and SQLSTATE `P0002` (`no_data_found`) map to 404.
/// - SQLSTATE `P0001` (`raise_exception`) maps to 400.
/// - `23505` unique violations map to 409; `23503` foreign-key violations
///   (a referenced assessment, criterion, or program is missing) map to 404.
/// - Everything else maps to 500 `UPSTREAM_ERROR`.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
        ),
        sqlx::Error::Database(db_err) => {
            let message = db_err.message().to_string();
            match db_err.code().as_deref() {
                Some("P0001") => (StatusCode::BAD_REQUEST, "BAD_REQUEST", message),
                Some("P0002") => (StatusCode::NOT_FOUND, "NOT_FOUND", message),
                Some("23505") => (StatusCode::CONFLICT, "CONFLICT", message),
                Some("23503") => (StatusCode::NOT_FOUND, "NOT_FOUND", message),
                code => {
                    tracing::error!(error = %db_err, code = ?code, "Database error");
                    (StatusCode::INTERNAL_SERVER_ERROR, "UPSTREAM_ERROR", message)
                }
            }
        }
        other => {
            tracing::error!(error = %other, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "UPSTREAM_ERROR",
                other.to_string(),
            )
        }
    }
}

fn classify_provider_error(err: &ProviderError) -> (StatusCode, &'static str, String) {
    match err {
        ProviderError::MissingConfig(_) => {
            tracing::error!(error = %err, "Provider not configured");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "MISSING_CONFIG",
                err.to_string(),
            )
        }
        ProviderError::Api { message, .. } => {
            tracing::error!(error = %err, "Provider returned an error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "UPSTREAM_ERROR",
                message.clone(),
            )
        }
        _ => {
            tracing::error!(error = %err, "Provider request failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "UPSTREAM_ERROR",
                err.to_string(),
            )
        }
    }
}

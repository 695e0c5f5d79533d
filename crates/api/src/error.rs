use axum::extract::multipart::MultipartError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use ceral_core::error::CoreError;
use ceral_pipeline::error::GENERIC_FAILURE_MESSAGE;
use ceral_pipeline::PipelineError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Implements [`IntoResponse`] to produce consistent JSON error responses
/// of the form `{ "error": message, "code": CODE }`.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `ceral_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A failed step of the publication workflow or a repository read.
    #[error(transparent)]
    Pipeline(#[from] PipelineError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl From<MultipartError> for AppError {
    fn from(err: MultipartError) -> Self {
        AppError::BadRequest(err.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INTERNAL_ERROR",
                        GENERIC_FAILURE_MESSAGE.to_string(),
                    )
                }
            },

            AppError::Pipeline(err) => match err {
                PipelineError::Validation(_) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", err.user_message())
                }
                PipelineError::NotFound { .. } => {
                    (StatusCode::NOT_FOUND, "NOT_FOUND", err.user_message())
                }
                PipelineError::Upload(e) => {
                    tracing::error!(error = %e, "Media upload failed");
                    (StatusCode::BAD_GATEWAY, "UPLOAD_ERROR", err.user_message())
                }
                PipelineError::Persistence(msg) => {
                    tracing::error!(error = %msg, "Project store failed");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "PERSISTENCE_ERROR",
                        err.user_message(),
                    )
                }
            },

            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

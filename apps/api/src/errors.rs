use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// The `error` strings sent to clients are a stable contract with the front end.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn prompt_required() -> Self {
        AppError::Validation("Prompt is required".to_string())
    }

    pub fn missing_api_key() -> Self {
        AppError::Configuration("DEEPSEEK_API_KEY not configured".to_string())
    }
}

/// Unreachable or refusing provider → 503; anything else → 500.
impl From<LlmError> for AppError {
    fn from(err: LlmError) -> Self {
        if err.is_unavailable() {
            AppError::ServiceUnavailable(err.to_string())
        } else {
            AppError::Internal(anyhow::Error::new(err))
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Configuration(msg) => {
                tracing::error!("Configuration error: {msg}");
                (StatusCode::INTERNAL_SERVER_ERROR, msg.clone())
            }
            AppError::ServiceUnavailable(detail) => {
                tracing::error!("LLM provider unavailable: {detail}");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "DeepSeek service unavailable".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "success": false,
            "error": message
        }));

        (status, body).into_response()
    }
}

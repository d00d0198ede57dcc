//! Axum route handler for the optimization API.

use axum::{body::Bytes, extract::State, Json};

use crate::errors::AppError;
use crate::models::prompt::{OptimizeResponse, PromptRequest};
use crate::state::AppState;

/// POST /api/optimize
///
/// Order matters: credential check, then body parsing and validation, then
/// provider calls. No failure in the first two steps reaches the provider.
/// The body is read as JSON whatever its Content-Type.
pub async fn handle_optimize(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<OptimizeResponse>, AppError> {
    let api_key = state.config.api_key().ok_or_else(AppError::missing_api_key)?;

    let request = PromptRequest::from_body(&body)?;
    let prompt = request.validated_prompt()?;

    let enhancement = state.optimizer.optimize(api_key, prompt).await?;

    Ok(Json(enhancement.into()))
}

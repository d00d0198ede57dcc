use axum::{body::Bytes, Json};

use crate::enhance::enhance_static;
use crate::errors::AppError;
use crate::models::prompt::{EnhanceResponse, PromptRequest};

/// POST /api/enhance
/// Static mode. Any string is accepted, the empty string included.
pub async fn handle_enhance(body: Bytes) -> Result<Json<EnhanceResponse>, AppError> {
    let request = PromptRequest::from_body(&body)?;
    let prompt = request.prompt_str()?;

    Ok(Json(EnhanceResponse {
        success: true,
        full_text: enhance_static(prompt),
    }))
}

use anyhow::Context;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::AppError;

/// Request body shared by both enhancement endpoints: `{ "prompt": ... }`.
///
/// `prompt` is kept as a raw JSON value so a non-string prompt is reported
/// as a validation failure rather than a parse failure.
#[derive(Debug)]
pub struct PromptRequest {
    pub prompt: Option<Value>,
}

impl PromptRequest {
    /// Reads a raw request body regardless of its Content-Type.
    ///
    /// Bytes that are not JSON at all are an internal error (500). Any JSON
    /// value parses; one without a `prompt` key fails validation later (400).
    pub fn from_body(body: &[u8]) -> Result<Self, AppError> {
        let value: Value =
            serde_json::from_slice(body).context("request body is not valid JSON")?;
        Ok(Self {
            prompt: value.get("prompt").cloned(),
        })
    }

    /// The prompt if it is a JSON string, empty strings included.
    pub fn prompt_str(&self) -> Result<&str, AppError> {
        match &self.prompt {
            Some(Value::String(s)) => Ok(s.as_str()),
            _ => Err(AppError::prompt_required()),
        }
    }

    /// The prompt if it is a string with non-whitespace content.
    /// Returned untrimmed.
    pub fn validated_prompt(&self) -> Result<&str, AppError> {
        let prompt = self.prompt_str()?;
        if prompt.trim().is_empty() {
            return Err(AppError::prompt_required());
        }
        Ok(prompt)
    }
}

/// Success body of `POST /api/optimize`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizeResponse {
    pub success: bool,
    pub prefix: String,
    pub optimized_prompt: String,
    pub suffix: String,
    pub full_text: String,
}

/// Success body of `POST /api/enhance`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnhanceResponse {
    pub success: bool,
    pub full_text: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(body: Value) -> PromptRequest {
        PromptRequest::from_body(body.to_string().as_bytes()).unwrap()
    }

    #[test]
    fn test_missing_prompt_is_rejected() {
        assert!(request(json!({})).validated_prompt().is_err());
    }

    #[test]
    fn test_whitespace_prompt_is_rejected() {
        assert!(request(json!({"prompt": "   \n  "})).validated_prompt().is_err());
    }

    #[test]
    fn test_non_string_prompt_is_rejected() {
        assert!(request(json!({"prompt": 42})).validated_prompt().is_err());
        assert!(request(json!({"prompt": null})).validated_prompt().is_err());
        assert!(request(json!({"prompt": ["a"]})).prompt_str().is_err());
    }

    #[test]
    fn test_valid_prompt_is_returned_untrimmed() {
        let req = request(json!({"prompt": "  什么是机器学习 "}));
        assert_eq!(req.validated_prompt().unwrap(), "  什么是机器学习 ");
    }

    #[test]
    fn test_from_body_rejects_malformed_json_as_internal() {
        for raw in ["{not json", r#"{"prompt": "x"#, ""] {
            let err = PromptRequest::from_body(raw.as_bytes()).unwrap_err();
            assert!(matches!(err, AppError::Internal(_)), "body: {raw:?}");
        }
    }

    #[test]
    fn test_from_body_non_object_json_has_no_prompt() {
        for raw in ["[]", "null", r#""什么是机器学习""#, "42"] {
            let req = PromptRequest::from_body(raw.as_bytes()).unwrap();
            assert!(req.prompt.is_none(), "body: {raw}");
            assert!(matches!(
                req.validated_prompt(),
                Err(AppError::Validation(_))
            ));
        }
    }

    #[test]
    fn test_empty_string_passes_prompt_str() {
        assert_eq!(request(json!({"prompt": ""})).prompt_str().unwrap(), "");
    }

    #[test]
    fn test_optimize_response_uses_camel_case() {
        let body = serde_json::to_value(OptimizeResponse {
            success: true,
            prefix: "p".to_string(),
            optimized_prompt: "o".to_string(),
            suffix: "s".to_string(),
            full_text: "f".to_string(),
        })
        .unwrap();
        assert_eq!(
            body,
            json!({
                "success": true,
                "prefix": "p",
                "optimizedPrompt": "o",
                "suffix": "s",
                "fullText": "f"
            })
        );
    }
}

//! Prompt Optimizer: turns a raw prompt into prefix + polished prompt + suffix.
//!
//! Two provider calls, issued in order, with deliberately different failure
//! handling:
//! - `generate_expert_prefix` returns `Result`: its failure fails the request.
//! - `polish_prompt` returns a plain `String`: on any failure the original
//!   prompt passes through unchanged.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::enhance::{compose_full_text, DEFAULT_PREFIX, SUFFIX};
use crate::errors::AppError;
use crate::llm_client::{ChatProvider, ChatRequest, LlmError};
use crate::models::prompt::OptimizeResponse;
use crate::optimize::prompts::{
    POLISH_MAX_TOKENS, POLISH_SYSTEM, POLISH_USER_TEMPLATE, PREFIX_MAX_TOKENS, PREFIX_SYSTEM,
    PREFIX_USER_TEMPLATE,
};

/// The assembled result of one optimization.
#[derive(Debug, Clone, PartialEq)]
pub struct Enhancement {
    pub prefix: String,
    pub optimized_prompt: String,
    pub suffix: String,
    pub full_text: String,
}

impl Enhancement {
    pub fn assemble(prefix: String, optimized_prompt: String) -> Self {
        let full_text = compose_full_text(&prefix, &optimized_prompt);
        Self {
            prefix,
            optimized_prompt,
            suffix: SUFFIX.to_string(),
            full_text,
        }
    }
}

impl From<Enhancement> for OptimizeResponse {
    fn from(e: Enhancement) -> Self {
        OptimizeResponse {
            success: true,
            prefix: e.prefix,
            optimized_prompt: e.optimized_prompt,
            suffix: e.suffix,
            full_text: e.full_text,
        }
    }
}

#[derive(Clone)]
pub struct PromptOptimizer {
    provider: Arc<dyn ChatProvider>,
}

impl PromptOptimizer {
    pub fn new(provider: Arc<dyn ChatProvider>) -> Self {
        Self { provider }
    }

    /// Asks the provider for a `你是 [领域]专家` role prefix.
    /// Empty answers fall back to [`DEFAULT_PREFIX`]; errors propagate.
    pub async fn generate_expert_prefix(
        &self,
        api_key: &str,
        prompt: &str,
    ) -> Result<String, LlmError> {
        let user = PREFIX_USER_TEMPLATE.replace("{prompt}", prompt);
        let answer = self
            .provider
            .complete(
                api_key,
                ChatRequest {
                    system: PREFIX_SYSTEM,
                    user: &user,
                    max_tokens: PREFIX_MAX_TOKENS,
                },
            )
            .await?;

        Ok(non_empty(answer).unwrap_or_else(|| {
            debug!("Prefix call returned no text, using default prefix");
            DEFAULT_PREFIX.to_string()
        }))
    }

    /// Asks the provider to fix punctuation and fluency.
    /// Never fails: empty answers and errors both yield `prompt` unchanged.
    pub async fn polish_prompt(&self, api_key: &str, prompt: &str) -> String {
        let user = POLISH_USER_TEMPLATE.replace("{prompt}", prompt);
        let result = self
            .provider
            .complete(
                api_key,
                ChatRequest {
                    system: POLISH_SYSTEM,
                    user: &user,
                    max_tokens: POLISH_MAX_TOKENS,
                },
            )
            .await;

        match result {
            Ok(answer) => non_empty(answer).unwrap_or_else(|| prompt.to_string()),
            Err(e) => {
                warn!("Polish call failed, passing prompt through: {e}");
                prompt.to_string()
            }
        }
    }

    /// Full pipeline. `prompt` must already be validated.
    pub async fn optimize(&self, api_key: &str, prompt: &str) -> Result<Enhancement, AppError> {
        let prefix = self.generate_expert_prefix(api_key, prompt).await?;
        let optimized_prompt = self.polish_prompt(api_key, prompt).await;

        info!(
            prefix = %prefix,
            polished = optimized_prompt != prompt,
            "Prompt optimized"
        );

        Ok(Enhancement::assemble(prefix, optimized_prompt))
    }
}

/// Trimmed text, or `None` when there is nothing left.
fn non_empty(answer: Option<String>) -> Option<String> {
    answer
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

/// LLM Client: the single point of entry for chat-completion calls.
///
/// ARCHITECTURAL RULE: No other module may call the provider API directly.
/// Services reach it through the `ChatProvider` trait so tests can swap in a fake.
///
/// Model and sampling temperature are fixed; only the output cap varies per call.
use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

#[cfg(test)]
pub mod fake;

pub const DEFAULT_API_URL: &str = "https://api.deepseek.com/v1/chat/completions";
/// The model used for every call.
pub const MODEL: &str = "deepseek-chat";
const TEMPERATURE: f32 = 0.3;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("provider API error (status {status}): {message}")]
    Status { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

impl LlmError {
    /// True when the provider could not be reached or refused the call,
    /// as opposed to answering with something we could not read.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, LlmError::Transport(_) | LlmError::Status { .. })
    }
}

/// One system + user exchange.
#[derive(Debug, Clone, Copy)]
pub struct ChatRequest<'a> {
    pub system: &'a str,
    pub user: &'a str,
    pub max_tokens: u32,
}

/// Anything that can answer a `ChatRequest`.
///
/// `Ok(None)` means the provider answered successfully but without any text.
#[async_trait]
pub trait ChatProvider: Send + Sync {
    async fn complete(
        &self,
        api_key: &str,
        request: ChatRequest<'_>,
    ) -> Result<Option<String>, LlmError>;
}

#[derive(Debug, Serialize)]
struct CompletionBody<'a> {
    model: &'a str,
    messages: [WireMessage<'a>; 2],
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct WireMessage<'a> {
    role: &'a str,
    content: &'a str,
}

/// Every level may be missing or null; both mean "no text".
#[derive(Debug, Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Option<Vec<Option<Choice>>>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Option<ChoiceMessage>,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

impl CompletionResponse {
    /// `choices[0].message.content`, if present.
    fn into_text(self) -> Option<String> {
        self.choices
            .into_iter()
            .flatten()
            .next()
            .flatten()
            .and_then(|c| c.message)
            .and_then(|m| m.content)
    }
}

#[derive(Debug, Deserialize)]
struct ProviderError {
    error: ProviderErrorBody,
}

#[derive(Debug, Deserialize)]
struct ProviderErrorBody {
    message: String,
}

/// reqwest-backed client for the chat-completions endpoint. No retries.
#[derive(Clone)]
pub struct DeepSeekClient {
    client: Client,
    api_url: String,
}

impl DeepSeekClient {
    pub fn new(api_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            api_url: api_url.into(),
        })
    }
}

#[async_trait]
impl ChatProvider for DeepSeekClient {
    async fn complete(
        &self,
        api_key: &str,
        request: ChatRequest<'_>,
    ) -> Result<Option<String>, LlmError> {
        let body = CompletionBody {
            model: MODEL,
            messages: [
                WireMessage {
                    role: "system",
                    content: request.system,
                },
                WireMessage {
                    role: "user",
                    content: request.user,
                },
            ],
            temperature: TEMPERATURE,
            max_tokens: request.max_tokens,
        };

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                warn!("LLM request failed before a response arrived: {e}");
                LlmError::Transport(e)
            })?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<ProviderError>(&text)
                .map(|e| e.error.message)
                .unwrap_or(text);
            warn!("LLM API returned {}: {}", status, message);
            return Err(LlmError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: CompletionResponse = serde_json::from_str(&text)?;
        let content = parsed.into_text();

        debug!(
            max_tokens = request.max_tokens,
            has_content = content.is_some(),
            "LLM call succeeded"
        );

        Ok(content)
    }
}

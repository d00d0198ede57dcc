//! In-memory `ChatProvider` for tests. Records every call it receives.

use std::sync::Mutex;

use async_trait::async_trait;

use super::{ChatProvider, ChatRequest, LlmError};

type Responder = Box<dyn Fn(&ChatRequest<'_>) -> Result<Option<String>, LlmError> + Send + Sync>;

/// What the fake saw for one call.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub api_key: String,
    pub system: String,
    pub user: String,
    pub max_tokens: u32,
}

pub struct FakeProvider {
    respond: Responder,
    calls: Mutex<Vec<RecordedCall>>,
}

impl FakeProvider {
    pub fn new(
        respond: impl Fn(&ChatRequest<'_>) -> Result<Option<String>, LlmError> + Send + Sync + 'static,
    ) -> Self {
        Self {
            respond: Box::new(respond),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Answers every call with the same text.
    pub fn always(text: &str) -> Self {
        let text = text.to_string();
        Self::new(move |_| Ok(Some(text.clone())))
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl ChatProvider for FakeProvider {
    async fn complete(
        &self,
        api_key: &str,
        request: ChatRequest<'_>,
    ) -> Result<Option<String>, LlmError> {
        self.calls.lock().unwrap().push(RecordedCall {
            api_key: api_key.to_string(),
            system: request.system.to_string(),
            user: request.user.to_string(),
            max_tokens: request.max_tokens,
        });
        (self.respond)(&request)
    }
}

/// A 503 from the provider, for simulating an outage without a network.
pub fn outage() -> LlmError {
    LlmError::Status {
        status: 503,
        message: "upstream unavailable".to_string(),
    }
}

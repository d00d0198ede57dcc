use anyhow::{Context, Result};

use crate::llm_client::DEFAULT_API_URL;

/// Application configuration loaded from environment variables.
///
/// The provider credential is optional at startup: a missing key is reported
/// per request by `/api/optimize`, so static mode keeps working without one.
#[derive(Debug, Clone)]
pub struct Config {
    pub deepseek_api_key: Option<String>,
    pub deepseek_api_url: String,
    pub llm_timeout_secs: u64,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            deepseek_api_key: optional_env("DEEPSEEK_API_KEY"),
            deepseek_api_url: optional_env("DEEPSEEK_API_URL")
                .unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            llm_timeout_secs: std::env::var("LLM_TIMEOUT_SECS")
                .unwrap_or_else(|_| "30".to_string())
                .parse::<u64>()
                .context("LLM_TIMEOUT_SECS must be a whole number of seconds")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }

    /// The provider credential, if one is configured.
    pub fn api_key(&self) -> Option<&str> {
        self.deepseek_api_key.as_deref()
    }
}

/// Blank values count as unset.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
impl Config {
    /// Configuration for tests: never touches the process environment.
    pub fn for_tests(api_key: Option<&str>) -> Self {
        Config {
            deepseek_api_key: api_key.map(str::to_string),
            deepseek_api_url: DEFAULT_API_URL.to_string(),
            llm_timeout_secs: 5,
            port: 0,
            rust_log: "debug".to_string(),
        }
    }
}

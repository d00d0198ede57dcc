mod config;
mod enhance;
mod errors;
mod llm_client;
mod models;
mod optimize;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::DeepSeekClient;
use crate::optimize::optimizer::PromptOptimizer;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting prompt enhancer v{}", env!("CARGO_PKG_VERSION"));

    if config.api_key().is_none() {
        warn!("DEEPSEEK_API_KEY is not set; /api/optimize will answer 500 until it is");
    }

    // Initialize LLM client
    let llm = DeepSeekClient::new(
        config.deepseek_api_url.clone(),
        Duration::from_secs(config.llm_timeout_secs),
    )?;
    info!(
        "LLM client initialized (model: {}, endpoint: {}, timeout: {}s)",
        llm_client::MODEL,
        config.deepseek_api_url,
        config.llm_timeout_secs
    );

    let state = AppState {
        optimizer: PromptOptimizer::new(Arc::new(llm)),
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

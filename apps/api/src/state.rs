use crate::config::Config;
use crate::optimize::optimizer::PromptOptimizer;

/// Shared application state injected into all route handlers via Axum extractors.
/// Read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub optimizer: PromptOptimizer,
}

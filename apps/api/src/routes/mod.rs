pub mod enhance;
pub mod health;
pub mod page;

use axum::{
    routing::{get, post},
    Router,
};

use crate::optimize::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(page::index_handler))
        .route("/health", get(health::health_handler))
        .route("/api/enhance", post(enhance::handle_enhance))
        .route("/api/optimize", post(handlers::handle_optimize))
        .with_state(state)
}

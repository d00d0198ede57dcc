use std::sync::OnceLock;

use axum::response::Html;

use crate::enhance::{DEFAULT_PREFIX, SUFFIX};

const INDEX_TEMPLATE: &str = include_str!("../../static/index.html");

static INDEX_HTML: OnceLock<String> = OnceLock::new();

/// The page with the static-mode constants filled in as JS string literals,
/// so the browser enhances offline with the same text the server uses.
fn render_index() -> String {
    INDEX_TEMPLATE
        .replace("__DEFAULT_PREFIX__", &js_string(DEFAULT_PREFIX))
        .replace("__SUFFIX__", &js_string(SUFFIX))
}

fn js_string(s: &str) -> String {
    serde_json::Value::from(s).to_string()
}

/// GET /
pub async fn index_handler() -> Html<&'static str> {
    Html(INDEX_HTML.get_or_init(render_index).as_str())
}

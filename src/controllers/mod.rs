pub mod editor;

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub fn routes() -> Router<Arc<crate::AppState>> {
    Router::new()
        .route("/health", get(|| async { "OK" }))
        .merge(editor::routes())
}

/// Готовый роутер хоста со state и трассировкой запросов.
pub fn router(state: Arc<crate::AppState>) -> Router {
    routes()
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

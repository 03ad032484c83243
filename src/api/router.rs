use axum::{Router, routing::get};
use tower_http::{services::ServeDir, trace::TraceLayer};

use super::state::AppState;
use super::{health, index};

/// Create the application router.
///
/// Chart artifacts are served from `static_dir` under `/static`, the same
/// directory the renderer writes into.
pub fn create_router(state: AppState, static_dir: &str) -> Router {
    Router::new()
        .route("/", get(index::index_get).post(index::index_post))
        .route("/health", get(health::health_check))
        .route("/ready", get(health::ready_check))
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::resume::handlers;
use crate::state::AppState;

/// `max_upload_bytes` caps every request body; uploads over it are answered with 413.
pub fn build_router(state: AppState, max_upload_bytes: usize) -> Router {
    Router::new()
        .route("/", get(health::root_handler))
        .route("/health", get(health::health_handler))
        .route("/api/resume/upload", post(handlers::handle_upload))
        .route("/api/resume/analyze", post(handlers::handle_analyze_text))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .with_state(state)
}

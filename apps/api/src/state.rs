use crate::extraction::TextExtractor;

/// Shared application state injected into all route handlers via Axum extractors.
/// Holds no per-request data.
#[derive(Clone)]
pub struct AppState {
    pub extractor: TextExtractor,
}

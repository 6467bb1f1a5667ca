// Route path constants - single source of truth for all API paths

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::handlers::{healthz_handler, not_found_handler, status_handler};

pub const HEALTHZ: &str = "/healthz";
pub const ROOT: &str = "/";

/// Builds the router for the full route set.
///
/// The route set is fixed and closed: two GET routes plus a catch-all 404
/// fallback. Unsupported methods on the known paths resolve to the same 404
/// fallback rather than axum's default 405, so every unmatched method+path
/// combination behaves identically.
pub fn create_router() -> Router {
    Router::new()
        .route(HEALTHZ, get(healthz_handler).fallback(not_found_handler))
        .route(ROOT, get(status_handler).fallback(not_found_handler))
        .fallback(not_found_handler)
        .layer(TraceLayer::new_for_http())
}

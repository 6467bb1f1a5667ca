use crate::error::ApiError;
use axum::http::{Method, Uri};

/// Fallback handler for requests outside the registered route set
///
/// The route set is fixed and closed, so anything unmatched resolves here
/// deterministically. A miss is expected control flow, not a failure, hence
/// the debug-level log.
pub async fn not_found_handler(method: Method, uri: Uri) -> ApiError {
    tracing::debug!("No route for {} {}", method, uri.path());

    ApiError::RouteNotFound {
        method: method.to_string(),
        path: uri.path().to_string(),
    }
}

use utoipa::OpenApi;

use crate::error::ErrorResponse;
use crate::handlers;
use crate::models::StatusResponse;

/// OpenAPI documentation
///
/// Describes the complete route set. Startup logging and tests read this
/// document, so the advertised surface cannot drift from the handlers.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "do-saas-k8s",
        version = "1.0.0",
        description = "Liveness probe and service identity endpoints"
    ),
    paths(
        handlers::healthz::healthz_handler,
        handlers::status::status_handler
    ),
    components(
        schemas(
            StatusResponse,
            ErrorResponse
        )
    ),
    tags(
        (name = "health", description = "Liveness probe"),
        (name = "status", description = "Service identity")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes;

    #[test]
    fn test_route_set_is_closed() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();

        // BTreeMap ordering: "/" sorts before "/healthz"
        assert_eq!(paths, vec![routes::ROOT, routes::HEALTHZ]);
    }
}

use crate::routes;

/// GET /healthz handler - Liveness probe
///
/// Returns the fixed literal `ok` as text/plain. This only asserts that the
/// process can respond to HTTP; it reads no state and allocates nothing
/// beyond the response itself.
#[utoipa::path(
    get,
    path = routes::HEALTHZ,
    responses(
        (status = 200, description = "Service is alive", body = String, content_type = "text/plain")
    ),
    tag = "health"
)]
pub async fn healthz_handler() -> &'static str {
    "ok"
}

use crate::config::SERVICE_NAME;
use crate::models::StatusResponse;
use crate::routes;
use axum::Json;
use chrono::Utc;

/// GET / handler - Service identity and status
///
/// Reports the fixed service identifier together with the wall-clock time in
/// milliseconds since the Unix epoch. The record is built fresh on every
/// request; the clock read is the handler's only external input.
#[utoipa::path(
    get,
    path = routes::ROOT,
    responses(
        (status = 200, description = "Service identity and current timestamp", body = StatusResponse)
    ),
    tag = "status"
)]
pub async fn status_handler() -> Json<StatusResponse> {
    Json(StatusResponse {
        service: SERVICE_NAME.to_string(),
        ts: Utc::now().timestamp_millis(),
    })
}

use serde::{Deserialize, Serialize};

/// Response type for the service status endpoint
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct StatusResponse {
    pub service: String,
    /// Milliseconds since the Unix epoch at the moment the request was handled
    pub ts: i64,
}

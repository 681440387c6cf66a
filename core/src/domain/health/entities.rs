use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DatabaseHealthStatus {
    pub status: String,
    pub database: String,
    /// Round trip of the ping query.
    pub latency_ms: u64,
}

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::api_entities::response::{ApiResponse, Response};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LivenessStatus {
    pub status: String,
}

#[utoipa::path(
    get,
    path = "/live",
    tag = "health",
    summary = "Liveness probe",
    responses(
        (status = 200, body = ApiResponse<LivenessStatus>)
    ),
)]
pub async fn live() -> Response<ApiResponse<LivenessStatus>> {
    Response::OK(ApiResponse::success(
        LivenessStatus {
            status: "alive".to_string(),
        },
        "Service is alive",
    ))
}

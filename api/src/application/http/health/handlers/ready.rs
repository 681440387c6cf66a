use axum::extract::State;
use bookshelf_core::domain::health::{entities::DatabaseHealthStatus, ports::HealthCheckService};

use crate::application::http::server::{
    api_entities::{
        api_error::{ApiError, ApiErrorResponse},
        response::{ApiResponse, Response},
    },
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "/ready",
    tag = "health",
    summary = "Readiness probe",
    description = "Pings the database.",
    responses(
        (status = 200, body = ApiResponse<DatabaseHealthStatus>),
        (status = 503, body = ApiErrorResponse),
    ),
)]
pub async fn ready(
    State(state): State<AppState>,
) -> Result<Response<ApiResponse<DatabaseHealthStatus>>, ApiError> {
    let status = state
        .service
        .readiness()
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ApiResponse::success(status, "Service is ready")))
}

use super::handlers::live::{__path_live, live};
use super::handlers::ready::{__path_ready, ready};
use crate::application::http::server::app_state::AppState;

use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(live, ready))]
pub struct HealthApiDoc;

pub fn health_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/health/live", state.args.server.root_path),
            get(live),
        )
        .route(
            &format!("{}/health/ready", state.args.server.root_path),
            get(ready),
        )
}

use std::collections::BTreeMap;

use axum::{
    Json,
    http::{HeaderName, HeaderValue, StatusCode},
    response::IntoResponse,
};
use bookshelf_core::domain::sieve::pagination::PaginationMetadata;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const X_TOTAL_COUNT: HeaderName = HeaderName::from_static("x-total-count");

/// Envelope wrapping every JSON body returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<BTreeMap<String, Vec<String>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagination: Option<PaginationMetadata>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
            errors: None,
            pagination: None,
        }
    }

    pub fn with_pagination(mut self, pagination: PaginationMetadata) -> Self {
        self.pagination = Some(pagination);
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Response<T: Serialize> {
    OK(T),
    /// 200 with the size of the whole filtered set in `X-Total-Count`.
    Paginated(T, u64),
}

impl<T> IntoResponse for Response<T>
where
    T: Serialize,
{
    fn into_response(self) -> axum::response::Response {
        match self {
            Response::OK(data) => (StatusCode::OK, Json(data)).into_response(),
            Response::Paginated(data, total_count) => (
                StatusCode::OK,
                [(X_TOTAL_COUNT, HeaderValue::from(total_count))],
                Json(data),
            )
                .into_response(),
        }
    }
}

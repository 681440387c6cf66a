use axum::{extract::FromRequestParts, http::request::Parts};
use serde::de::DeserializeOwned;
use validator::Validate;

use super::server::api_entities::api_error::ApiError;

/// Extractor for query parameters validated with `validator` rules.
///
/// Usage:
/// ```rust,ignore
/// async fn handler(
///     ValidateQuery(query): ValidateQuery<GetBooksQuery>,
/// ) -> Result<Response<..>, ApiError> {
///     // query.filters, query.sorts, query.page, query.page_size
/// }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidateQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for ValidateQuery<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let query_string = parts.uri.query().unwrap_or("");
        let value: T = serde_urlencoded::from_str(query_string)
            .map_err(|e| ApiError::BadRequest(format!("Invalid query string: {}", e)))?;

        value.validate()?;

        Ok(ValidateQuery(value))
    }
}

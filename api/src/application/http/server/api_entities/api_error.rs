use std::collections::BTreeMap;

use axum::{Json, http::StatusCode, response::IntoResponse};
use bookshelf_core::domain::common::entities::app_errors::CoreError;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::error;
use utoipa::ToSchema;
use validator::ValidationErrors;

pub const UNEXPECTED_ERROR_MESSAGE: &str = "An unexpected error occurred";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    /// 400 with the offending query parameters and their messages.
    #[error("{0}")]
    InvalidParameters(String, BTreeMap<String, Vec<String>>),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    ServiceUnavailable(String),

    #[error("{0}")]
    InternalServerError(String),
}

/// Body of every error response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApiErrorResponse {
    pub success: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<BTreeMap<String, Vec<String>>>,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) | ApiError::InvalidParameters(_, _) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();

        let body = match self {
            ApiError::InvalidParameters(message, errors) => ApiErrorResponse {
                success: false,
                message,
                errors: Some(errors),
            },
            ApiError::InternalServerError(cause) => {
                error!("Request failed: {}", cause);
                ApiErrorResponse {
                    success: false,
                    message: UNEXPECTED_ERROR_MESSAGE.to_string(),
                    errors: None,
                }
            }
            ApiError::BadRequest(message)
            | ApiError::NotFound(message)
            | ApiError::ServiceUnavailable(message) => ApiErrorResponse {
                success: false,
                message,
                errors: None,
            },
        };

        (status, Json(body)).into_response()
    }
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::NotFound => ApiError::NotFound("Resource not found".to_string()),
            CoreError::Sieve(e) if e.is_client_error() => {
                let mut errors = BTreeMap::new();
                if let Some(parameter) = e.parameter() {
                    errors.insert(parameter.to_string(), vec![e.to_string()]);
                }
                ApiError::InvalidParameters(e.to_string(), errors)
            }
            CoreError::Sieve(e) => ApiError::InternalServerError(e.to_string()),
            CoreError::ServiceUnavailable(reason) => ApiError::ServiceUnavailable(reason),
            CoreError::InternalServerError => {
                ApiError::InternalServerError("core service failure".to_string())
            }
        }
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        let mut by_parameter: BTreeMap<String, Vec<String>> = BTreeMap::new();

        for (field, field_errors) in errors.field_errors() {
            let messages = field_errors.iter().map(|e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field))
            });
            by_parameter
                .entry(camel_case(&field))
                .or_default()
                .extend(messages);
        }

        let mut messages = by_parameter.values().flatten();
        let message = match (messages.next(), messages.next()) {
            (Some(only), None) => only.clone(),
            _ => "One or more validation errors occurred".to_string(),
        };

        ApiError::InvalidParameters(message, by_parameter)
    }
}

fn camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper = false;
    for c in field.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookshelf_core::domain::sieve::entities::errors::{SieveError, SieveOperation};

    #[test]
    fn test_client_sieve_error_is_keyed_by_parameter() {
        let error = ApiError::from(CoreError::Sieve(SieveError::UnknownField {
            field: "isbn".to_string(),
            operation: SieveOperation::Filter,
        }));

        let ApiError::InvalidParameters(message, errors) = error else {
            panic!("expected invalid parameters");
        };
        assert_eq!(message, "Field 'isbn' cannot be used to filter");
        assert_eq!(errors["filters"], vec![message.clone()]);
    }

    #[test]
    fn test_server_side_errors_are_internal() {
        let error = ApiError::from(CoreError::Sieve(SieveError::UnmappedPath(
            "publisher.name".to_string(),
        )));
        assert_eq!(error.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let error = ApiError::from(CoreError::InternalServerError);
        assert_eq!(error.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_camel_case() {
        assert_eq!(camel_case("price_range"), "priceRange");
        assert_eq!(camel_case("page"), "page");
    }
}

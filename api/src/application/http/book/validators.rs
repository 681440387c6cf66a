use bookshelf_core::domain::{
    book::value_objects::PRICE_RANGE_REGEX, sieve::value_objects::SieveModel,
};
use serde::{Deserialize, Serialize};
use utoipa::IntoParams;
use validator::Validate;

pub const INVALID_PRICE_RANGE_MESSAGE: &str =
    "Invalid price range format. Use min-max (e.g., 10.50-20.99)";

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query, rename_all = "camelCase")]
pub struct GetBooksQuery {
    /// Comma separated filter clauses, e.g. `price>10,genre==Fiction`
    pub filters: Option<String>,

    /// Comma separated sort fields, `-` prefix for descending, e.g. `-price,title`
    pub sorts: Option<String>,

    #[validate(range(min = 1, message = "page must be at least 1"))]
    #[param(minimum = 1)]
    pub page: Option<i64>,

    #[validate(range(min = 1, message = "pageSize must be at least 1"))]
    #[param(minimum = 1)]
    pub page_size: Option<i64>,
}

impl From<GetBooksQuery> for SieveModel {
    fn from(query: GetBooksQuery) -> Self {
        Self {
            filters: query.filters,
            sorts: query.sorts,
            page: query.page,
            page_size: query.page_size,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query, rename_all = "camelCase")]
pub struct GetBooksAdvancedQuery {
    pub filters: Option<String>,

    pub sorts: Option<String>,

    #[validate(range(min = 1, message = "page must be at least 1"))]
    #[param(minimum = 1)]
    pub page: Option<i64>,

    #[validate(range(min = 1, message = "pageSize must be at least 1"))]
    #[param(minimum = 1)]
    pub page_size: Option<i64>,

    /// Inclusive `min-max` price bounds, e.g. `10.50-20.99`
    #[validate(regex(path = *PRICE_RANGE_REGEX, message = "Invalid price range format. Use min-max (e.g., 10.50-20.99)"))]
    pub price_range: Option<String>,
}

impl GetBooksAdvancedQuery {
    pub fn into_parts(self) -> (SieveModel, Option<String>) {
        (
            SieveModel {
                filters: self.filters,
                sorts: self.sorts,
                page: self.page,
                page_size: self.page_size,
            },
            self.price_range,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_below_one_is_rejected() {
        let query: GetBooksQuery = serde_urlencoded::from_str("page=0&pageSize=5").unwrap();
        let errors = query.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("page"));
        assert!(!errors.field_errors().contains_key("page_size"));
    }

    #[test]
    fn test_price_range_format() {
        let valid: GetBooksAdvancedQuery =
            serde_urlencoded::from_str("priceRange=10.50-20.99").unwrap();
        assert!(valid.validate().is_ok());

        let absent = GetBooksAdvancedQuery::default();
        assert!(absent.validate().is_ok());

        let invalid: GetBooksAdvancedQuery =
            serde_urlencoded::from_str("priceRange=invalid").unwrap();
        let errors = invalid.validate().unwrap_err();
        let message = errors.field_errors()["price_range"][0]
            .message
            .as_ref()
            .map(|m| m.to_string());
        assert_eq!(message.as_deref(), Some(INVALID_PRICE_RANGE_MESSAGE));
    }
}

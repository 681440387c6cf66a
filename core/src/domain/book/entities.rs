use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::sieve::mapping::SieveEntity;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: i32,
    pub title: String,
    pub author: String,
    pub published_date: DateTime<Utc>,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub price: Decimal,
    pub genre: String,
    pub is_available: bool,
    pub page_count: i32,
    pub isbn: String,
    pub publisher_id: i32,
    pub publisher: Option<Publisher>,
}

impl SieveEntity for Book {
    const ENTITY: &'static str = "book";
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Publisher {
    pub id: i32,
    pub name: String,
    pub country: String,
}

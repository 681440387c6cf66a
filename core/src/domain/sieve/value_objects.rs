use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use utoipa::{IntoParams, ToSchema};

use super::mapping::AccessPath;

/// Raw sieve request as it arrives from the query string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct SieveModel {
    /// Comma separated filter clauses, e.g. `price>10,genre==Fiction`
    pub filters: Option<String>,
    /// Comma separated sort fields, `-` prefix for descending, e.g. `-price,title`
    pub sorts: Option<String>,
    /// 1-based page number
    pub page: Option<i64>,
    pub page_size: Option<i64>,
}

/// Scalar type a mapped field resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Integer,
    Decimal,
    Boolean,
    DateTime,
}

impl FieldKind {
    pub fn name(&self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Integer => "integer",
            FieldKind::Decimal => "decimal",
            FieldKind::Boolean => "boolean",
            FieldKind::DateTime => "date",
        }
    }

    pub fn coerce(&self, raw: &str) -> Option<FieldValue> {
        match self {
            FieldKind::Text => Some(FieldValue::Text(raw.to_string())),
            FieldKind::Integer => raw.trim().parse::<i64>().ok().map(FieldValue::Integer),
            FieldKind::Decimal => Decimal::from_str(raw.trim()).ok().map(FieldValue::Decimal),
            FieldKind::Boolean => match raw.trim().to_ascii_lowercase().as_str() {
                "true" => Some(FieldValue::Boolean(true)),
                "false" => Some(FieldValue::Boolean(false)),
                _ => None,
            },
            FieldKind::DateTime => parse_datetime(raw.trim()).map(FieldValue::DateTime),
        }
    }
}

fn parse_datetime(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return Some(dt.and_utc());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

/// Filter value after coercion to the field's kind.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Integer(i64),
    Decimal(Decimal),
    Boolean(bool),
    DateTime(DateTime<Utc>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOperator {
    Equals,
    NotEquals,
    GreaterThan,
    GreaterOrEqual,
    LessThan,
    LessOrEqual,
    Contains,
    StartsWith,
    EndsWith,
    NotContains,
    NotStartsWith,
    NotEndsWith,
}

impl FilterOperator {
    /// Operators matching on the field's textual representation.
    pub fn is_substring(&self) -> bool {
        matches!(
            self,
            FilterOperator::Contains
                | FilterOperator::StartsWith
                | FilterOperator::EndsWith
                | FilterOperator::NotContains
                | FilterOperator::NotStartsWith
                | FilterOperator::NotEndsWith
        )
    }

    pub fn is_negated(&self) -> bool {
        matches!(
            self,
            FilterOperator::NotEquals
                | FilterOperator::NotContains
                | FilterOperator::NotStartsWith
                | FilterOperator::NotEndsWith
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FilterClause {
    pub field: String,
    pub path: AccessPath,
    pub kind: FieldKind,
    pub operator: FilterOperator,
    pub value: FieldValue,
    pub case_insensitive: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortClause {
    pub field: String,
    pub path: AccessPath,
    pub direction: SortDirection,
    pub position: usize,
}

impl SortClause {
    pub fn is_descending(&self) -> bool {
        self.direction == SortDirection::Desc
    }
}

/// A validated sieve request, ready to be applied to a query.
#[derive(Debug, Clone, PartialEq)]
pub struct SieveQuery {
    pub filters: Vec<FilterClause>,
    pub sorts: Vec<SortClause>,
    pub page: u64,
    pub page_size: u64,
}

/// Largest offset or limit a SQL driver binds as a signed 64-bit integer.
const MAX_ROW_BOUND: u64 = i64::MAX as u64;

impl SieveQuery {
    pub fn skip(&self) -> u64 {
        self.page
            .saturating_sub(1)
            .saturating_mul(self.page_size)
            .min(MAX_ROW_BOUND)
    }

    pub fn take(&self) -> u64 {
        self.page_size.min(MAX_ROW_BOUND)
    }
}

/// Stages of [`apply`](super::services::apply) to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SieveStages {
    pub filtering: bool,
    pub sorting: bool,
    pub pagination: bool,
}

impl SieveStages {
    pub fn all() -> Self {
        Self {
            filtering: true,
            sorting: true,
            pagination: true,
        }
    }

    /// Same predicate as [`SieveStages::all`], used for counting.
    pub fn filtering_only() -> Self {
        Self {
            filtering: true,
            sorting: false,
            pagination: false,
        }
    }
}

impl Default for SieveStages {
    fn default() -> Self {
        Self::all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    #[test]
    fn test_coerce_decimal() {
        assert_eq!(
            FieldKind::Decimal.coerce("12.99"),
            Some(FieldValue::Decimal(dec!(12.99)))
        );
        assert_eq!(FieldKind::Decimal.coerce("abc"), None);
    }

    #[test]
    fn test_coerce_boolean_is_case_insensitive() {
        assert_eq!(
            FieldKind::Boolean.coerce("True"),
            Some(FieldValue::Boolean(true))
        );
        assert_eq!(FieldKind::Boolean.coerce("yes"), None);
    }

    #[test]
    fn test_coerce_dates() {
        let expected = Utc.with_ymd_and_hms(1925, 4, 10, 0, 0, 0).unwrap();
        assert_eq!(
            FieldKind::DateTime.coerce("1925-04-10"),
            Some(FieldValue::DateTime(expected))
        );
        assert_eq!(
            FieldKind::DateTime.coerce("1925-04-10T00:00:00"),
            Some(FieldValue::DateTime(expected))
        );
        assert_eq!(
            FieldKind::DateTime.coerce("1925-04-10T00:00:00Z"),
            Some(FieldValue::DateTime(expected))
        );
        assert_eq!(FieldKind::DateTime.coerce("10/04/1925"), None);
    }

    #[test]
    fn test_skip_and_take() {
        let query = SieveQuery {
            filters: vec![],
            sorts: vec![],
            page: 3,
            page_size: 10,
        };
        assert_eq!(query.skip(), 20);
        assert_eq!(query.take(), 10);
    }

    #[test]
    fn test_skip_and_take_fit_in_i64() {
        let query = SieveQuery {
            filters: vec![],
            sorts: vec![],
            page: i64::MAX as u64,
            page_size: u64::MAX,
        };
        assert_eq!(query.skip(), i64::MAX as u64);
        assert_eq!(query.take(), i64::MAX as u64);
    }
}

use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::Decimal;

use crate::domain::{
    book::entities::Book,
    sieve::{entities::errors::SieveError, pagination::PaginationMetadata},
};

/// `min-max` with optional fractional parts, e.g. `10.50-20.99`.
pub static PRICE_RANGE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d+(\.\d+)?-\d+(\.\d+)?$").expect("price range pattern is valid")
});

/// Inclusive price bounds. `min > max` is accepted and matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceRange {
    pub min: Decimal,
    pub max: Decimal,
}

impl FromStr for PriceRange {
    type Err = SieveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !PRICE_RANGE_REGEX.is_match(s) {
            return Err(SieveError::InvalidRangeFormat(s.to_string()));
        }

        let (min, max) = s
            .split_once('-')
            .ok_or_else(|| SieveError::InvalidRangeFormat(s.to_string()))?;

        let parse = |raw: &str| {
            Decimal::from_str(raw).map_err(|_| SieveError::InvalidRangeFormat(s.to_string()))
        };

        Ok(Self {
            min: parse(min)?,
            max: parse(max)?,
        })
    }
}

/// One page of books with the size of the whole filtered set.
#[derive(Debug, Clone, PartialEq)]
pub struct BookPage {
    pub items: Vec<Book>,
    pub total_count: u64,
    pub pagination: PaginationMetadata,
}

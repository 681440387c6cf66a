use thiserror::Error;

/// Which half of a sieve request a field was referenced from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SieveOperation {
    Filter,
    Sort,
}

impl std::fmt::Display for SieveOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SieveOperation::Filter => write!(f, "filter"),
            SieveOperation::Sort => write!(f, "sort"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SieveError {
    #[error("Field '{field}' cannot be used to {operation}")]
    UnknownField {
        field: String,
        operation: SieveOperation,
    },

    #[error("Value '{value}' is not a valid {expected} for field '{field}'")]
    ValueCoercion {
        field: String,
        value: String,
        expected: &'static str,
    },

    #[error("Malformed filter clause '{0}'")]
    InvalidFilterSyntax(String),

    #[error("Page and page size must be at least 1 (page: {page}, page size: {page_size})")]
    InvalidPagination { page: i64, page_size: i64 },

    #[error("Invalid price range format '{0}'")]
    InvalidRangeFormat(String),

    #[error("Field '{field}' is registered twice for entity '{entity}'")]
    DuplicateField { entity: &'static str, field: String },

    #[error("Field '{field}' has an invalid access path")]
    InvalidAccessPath { field: String },

    #[error("No column is mapped for access path '{0}'")]
    UnmappedPath(String),
}

impl SieveError {
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            SieveError::UnknownField { .. }
                | SieveError::ValueCoercion { .. }
                | SieveError::InvalidFilterSyntax(_)
                | SieveError::InvalidPagination { .. }
                | SieveError::InvalidRangeFormat(_)
        )
    }

    /// Query parameter the caller should fix, for client errors.
    pub fn parameter(&self) -> Option<&'static str> {
        match self {
            SieveError::UnknownField {
                operation: SieveOperation::Filter,
                ..
            }
            | SieveError::ValueCoercion { .. }
            | SieveError::InvalidFilterSyntax(_) => Some("filters"),
            SieveError::UnknownField {
                operation: SieveOperation::Sort,
                ..
            } => Some("sorts"),
            SieveError::InvalidPagination { .. } => Some("page"),
            SieveError::InvalidRangeFormat(_) => Some("priceRange"),
            _ => None,
        }
    }
}

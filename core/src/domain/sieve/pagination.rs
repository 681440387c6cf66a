use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMetadata {
    pub total_count: u64,
    pub page_size: u64,
    pub current_page: u64,
    pub total_pages: u64,
    pub has_previous: bool,
    pub has_next: bool,
}

impl PaginationMetadata {
    /// `page_size` is at least 1 for any parsed query; 0 is treated as 1.
    pub fn new(total_count: u64, page_size: u64, current_page: u64) -> Self {
        let total_pages = total_count.div_ceil(page_size.max(1));

        Self {
            total_count,
            page_size,
            current_page,
            total_pages,
            has_previous: current_page > 1,
            has_next: current_page < total_pages,
        }
    }

    pub fn total_pages(&self) -> u64 {
        self.total_pages
    }

    pub fn has_previous(&self) -> bool {
        self.has_previous
    }

    pub fn has_next(&self) -> bool {
        self.has_next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_page() {
        let metadata = PaginationMetadata::new(5, 10, 1);
        assert_eq!(metadata.total_pages(), 1);
        assert!(!metadata.has_next());
        assert!(!metadata.has_previous());
    }

    #[test]
    fn test_middle_page() {
        let metadata = PaginationMetadata::new(25, 10, 2);
        assert_eq!(metadata.total_pages(), 3);
        assert!(metadata.has_next());
        assert!(metadata.has_previous());
    }

    #[test]
    fn test_empty_result() {
        let metadata = PaginationMetadata::new(0, 10, 1);
        assert_eq!(metadata.total_pages(), 0);
        assert!(!metadata.has_next());
    }

    #[test]
    fn test_serializes_camel_case_with_derived_fields() {
        let json = serde_json::to_value(PaginationMetadata::new(5, 2, 3)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "totalCount": 5,
                "pageSize": 2,
                "currentPage": 3,
                "totalPages": 3,
                "hasPrevious": true,
                "hasNext": false
            })
        );
    }
}

//! Pagination query parameter extractor.

use serde::{Deserialize, Serialize};

use eventhub_core::config::PaginationConfig;
use eventhub_core::types::pagination::PageRequest;

/// Query parameters for paginated endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PaginationParams {
    /// Page number (1-based, default: 1).
    pub page: Option<u64>,
    /// Items per page (default and maximum come from configuration).
    pub size: Option<u64>,
}

impl PaginationParams {
    /// Converts to a `PageRequest`, applying configured defaults and limits.
    pub fn into_page_request(self, config: &PaginationConfig) -> PageRequest {
        let size = self
            .size
            .unwrap_or(config.default_page_size)
            .clamp(1, config.max_page_size.max(1));
        let page = self.page.unwrap_or(1).max(1);

        PageRequest::new(page, size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_and_clamping() {
        let config = PaginationConfig::default();

        let req = PaginationParams::default().into_page_request(&config);
        assert_eq!((req.page, req.page_size), (1, 10));

        let req = PaginationParams {
            page: Some(0),
            size: Some(1000),
        }
        .into_page_request(&config);
        assert_eq!((req.page, req.page_size), (1, 100));
    }
}

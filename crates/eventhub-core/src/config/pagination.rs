//! Paging limits for list endpoints.

use serde::{Deserialize, Serialize};

/// Page size settings applied to list queries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginationConfig {
    /// Page size used when the client does not send one.
    #[serde(default = "default_page_size")]
    pub default_page_size: u64,
    /// Upper bound for client-supplied page sizes.
    #[serde(default = "default_max_page_size")]
    pub max_page_size: u64,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_page_size: default_page_size(),
            max_page_size: default_max_page_size(),
        }
    }
}

fn default_page_size() -> u64 {
    10
}

fn default_max_page_size() -> u64 {
    100
}

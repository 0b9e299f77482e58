//! Request/Response DTOs

use serde::{Deserialize, Serialize};

/// Category creation request. Fields are optional so missing-name
/// validation can answer 400 instead of a deserialization failure.
#[derive(Debug, Deserialize)]
pub struct CreateCategoryRequest {
    pub name: Option<String>,
    pub description: Option<String>,
}

/// Organization creation request
#[derive(Debug, Deserialize)]
pub struct CreateOrganizationRequest {
    pub name: Option<String>,
}

/// Full report listing: `{ success, data }`
#[derive(Debug, Serialize)]
pub struct ReportListResponse<T> {
    pub success: bool,
    pub data: Vec<T>,
}

/// Feed envelope with a count: `{ success, data, total }`
#[derive(Debug, Serialize)]
pub struct FeedResponse<T> {
    pub success: bool,
    pub data: Vec<T>,
    pub total: usize,
}

impl<T> FeedResponse<T> {
    /// Wrap a feed payload; `total` is the entry count of `data` itself.
    pub fn new(data: Vec<T>) -> Self {
        let total = data.len();
        Self {
            success: true,
            data,
            total,
        }
    }
}

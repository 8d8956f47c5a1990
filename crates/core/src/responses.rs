//! JSON bodies exchanged over the HTTP API

use crate::books::{Book, PageRequest};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        ErrorResponse {
            error: error.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuccessMessage {
    pub message: String,
}

impl SuccessMessage {
    pub fn new(message: impl Into<String>) -> Self {
        SuccessMessage {
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookResponse {
    pub message: String,
    pub data: Book,
}

/// Pagination metadata for book listings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub limit: u32,
    pub page: u32,
    pub total_count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookListResponse {
    pub data: Vec<Book>,
    pub pagination: Pagination,
}

impl BookListResponse {
    pub fn new(data: Vec<Book>, page: PageRequest, total_count: u64) -> Self {
        BookListResponse {
            data,
            pagination: Pagination {
                limit: page.limit(),
                page: page.page,
                total_count,
            },
        }
    }
}

/// Request body for `POST /process_url`
///
/// Both fields default to empty so that a missing field and an empty one are
/// rejected the same way.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessUrlRequest {
    pub url: String,
    pub operation: String,
}

impl ProcessUrlRequest {
    pub fn is_complete(&self) -> bool {
        !self.url.is_empty() && !self.operation.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessUrlResponse {
    pub processed_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_url_request_missing_field_is_incomplete() {
        let request: ProcessUrlRequest =
            serde_json::from_str(r#"{"url": "https://example.com"}"#).unwrap();
        assert!(!request.is_complete());
    }

    #[test]
    fn test_process_url_request_empty_url_is_incomplete() {
        let request: ProcessUrlRequest =
            serde_json::from_str(r#"{"url": "", "operation": "all"}"#).unwrap();
        assert!(!request.is_complete());
    }

    #[test]
    fn test_book_list_response_shape() {
        let page = PageRequest {
            page: 2,
            page_size: 5,
        };
        let value = serde_json::to_value(BookListResponse::new(vec![], page, 7)).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "data": [],
                "pagination": {"limit": 5, "page": 2, "total_count": 7}
            })
        );
    }
}

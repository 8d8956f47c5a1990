use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use libris_core::books::{BookValidationError, PageParamError};
use libris_core::responses::ErrorResponse;
use std::fmt::Display;

/// Errors returned by HTTP handlers
///
/// The `Display` text is the message sent to the client. Underlying causes are
/// logged by [`ApiError::internal`] and never serialized.
#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    #[error("Invalid input")]
    InvalidInput,

    #[error("Invalid ID")]
    InvalidId,

    #[error("{0}")]
    Validation(#[from] BookValidationError),

    #[error("{0}")]
    PageParam(#[from] PageParamError),

    #[error("Book not found")]
    NotFound,

    #[error("{0}")]
    Internal(&'static str),
}

impl ApiError {
    /// Log `cause` under `message` and return a 500 carrying only `message`
    pub fn internal(message: &'static str, cause: impl Display) -> Self {
        log::error!("{message}: {cause}");
        ApiError::Internal(message)
    }

    /// Log a rejected request body and return `Invalid input`
    pub fn invalid_input(cause: impl Display) -> Self {
        log::error!("Invalid input: {cause}");
        ApiError::InvalidInput
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidInput
            | ApiError::InvalidId
            | ApiError::Validation(_)
            | ApiError::PageParam(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(ApiError::InvalidInput.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::from(BookValidationError::EmptyAuthor).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::NotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::internal("Error adding book", "disk full").status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_internal_hides_cause() {
        let err = ApiError::internal("Error processing URL", "relative URL without a base");
        assert_eq!(err.to_string(), "Error processing URL");
    }

    #[test]
    fn test_validation_message_passes_through() {
        let err = ApiError::from(PageParamError::InvalidPageSize);
        assert_eq!(
            err.to_string(),
            "Invalid pageSize parameter. Page size must be a positive integer"
        );
    }
}

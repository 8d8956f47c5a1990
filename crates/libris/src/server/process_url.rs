use crate::prelude::ApiError;
use axum::extract::rejection::JsonRejection;
use axum::Json;
use libris_core::responses::{ProcessUrlRequest, ProcessUrlResponse};
use libris_core::url::Operation;

/// `POST /process_url`
pub async fn process_url(
    payload: Result<Json<ProcessUrlRequest>, JsonRejection>,
) -> Result<Json<ProcessUrlResponse>, ApiError> {
    let Json(request) = payload.map_err(ApiError::invalid_input)?;
    if !request.is_complete() {
        return Err(ApiError::invalid_input("url and operation are required"));
    }

    // Kept for compatibility: an unknown operation answers 200 with an empty URL.
    if Operation::from_name(&request.operation).is_none() {
        log::warn!(
            "Unrecognized operation {:?}, returning an empty URL",
            request.operation
        );
    }

    let processed_url = libris_core::url::process_url(&request.url, &request.operation)
        .map_err(|e| ApiError::internal("Error processing URL", e))?;

    Ok(Json(ProcessUrlResponse { processed_url }))
}

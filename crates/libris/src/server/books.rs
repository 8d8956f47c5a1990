use super::AppState;
use crate::prelude::ApiError;
use crate::store::run_blocking;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use libris_core::books::{Book, NewBook, PageRequest};
use libris_core::responses::{BookListResponse, BookResponse, SuccessMessage};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ListParams {
    page: Option<String>,
    #[serde(rename = "pageSize")]
    page_size: Option<String>,
}

fn parse_id(raw: &str) -> Result<i64, ApiError> {
    raw.parse::<i64>().map_err(|e| {
        log::error!("Invalid ID {raw:?}: {e}");
        ApiError::InvalidId
    })
}

async fn find_book(state: &AppState, id: i64) -> Result<Book, ApiError> {
    run_blocking(&state.books, move |store| store.get(id))
        .await
        .map_err(|e| ApiError::internal("Error fetching book", e))?
        .ok_or_else(|| {
            log::error!("Book not found: {id}");
            ApiError::NotFound
        })
}

/// `GET /books?page&pageSize`, newest publication year first
pub async fn list_books(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<BookListResponse>, ApiError> {
    let page = PageRequest::from_query(params.page.as_deref(), params.page_size.as_deref())?;

    let books = run_blocking(&state.books, move |store| store.list(page))
        .await
        .map_err(|e| ApiError::internal("Error fetching books", e))?;

    let total = run_blocking(&state.books, |store| store.count())
        .await
        .map_err(|e| ApiError::internal("Error counting books", e))?;

    Ok(Json(BookListResponse::new(books, page, total)))
}

/// `POST /books`
pub async fn add_book(
    State(state): State<AppState>,
    payload: Result<Json<NewBook>, JsonRejection>,
) -> Result<(StatusCode, Json<BookResponse>), ApiError> {
    let Json(book) = payload.map_err(ApiError::invalid_input)?;
    book.validate()?;

    let created = run_blocking(&state.books, move |store| store.create(&book))
        .await
        .map_err(|e| ApiError::internal("Error adding book", e))?;

    log::info!("Created book {}", created.id);
    Ok((
        StatusCode::CREATED,
        Json(BookResponse {
            message: "Book created successfully".to_string(),
            data: created,
        }),
    ))
}

/// `GET /books/{id}`
pub async fn get_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Book>, ApiError> {
    let id = parse_id(&id)?;
    Ok(Json(find_book(&state, id).await?))
}

/// `PUT /books/{id}`: only non-empty fields of the body are applied
pub async fn update_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<NewBook>, JsonRejection>,
) -> Result<Json<BookResponse>, ApiError> {
    let id = parse_id(&id)?;
    let Json(patch) = payload.map_err(ApiError::invalid_input)?;

    let mut book = find_book(&state, id).await?;
    if !book.apply(&patch) {
        log::debug!("Book {id} unchanged, skipping write");
        return Ok(Json(BookResponse {
            message: "Book successfully updated".to_string(),
            data: book,
        }));
    }

    let updated = run_blocking(&state.books, move |store| store.update(&book))
        .await
        .map_err(|e| ApiError::internal("Error updating book", e))?
        .ok_or_else(|| {
            log::error!("Book {id} disappeared before update");
            ApiError::NotFound
        })?;

    Ok(Json(BookResponse {
        message: "Book successfully updated".to_string(),
        data: updated,
    }))
}

/// `DELETE /books/{id}`
pub async fn delete_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SuccessMessage>, ApiError> {
    let id = parse_id(&id)?;
    let book = find_book(&state, id).await?;

    let deleted = run_blocking(&state.books, move |store| store.delete(book.id))
        .await
        .map_err(|e| ApiError::internal("Error deleting book", e))?;
    if !deleted {
        return Err(ApiError::NotFound);
    }

    Ok(Json(SuccessMessage::new("Book successfully deleted")))
}

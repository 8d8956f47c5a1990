use super::{books, process_url};
use crate::store::BookStore;
use axum::http::{header, Method};
use axum::routing::{get, post};
use axum::{Json, Router};
use libris_core::responses::SuccessMessage;
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Dependencies shared by every handler
#[derive(Clone)]
pub struct AppState {
    pub books: Arc<dyn BookStore>,
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/books", get(books::list_books).post(books::add_book))
        .route(
            "/books/{id}",
            get(books::get_book)
                .put(books::update_book)
                .delete(books::delete_book),
        )
        .route("/process_url", post(process_url::process_url))
        .layer(cors())
        .with_state(state)
}

// Credentials cannot be combined with a wildcard origin, so the request origin is echoed.
fn cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::ORIGIN, header::CONTENT_TYPE, header::AUTHORIZATION])
        .expose_headers([header::CONTENT_LENGTH])
        .allow_credentials(true)
}

async fn health() -> Json<SuccessMessage> {
    Json(SuccessMessage::new("ok"))
}

//! Book persistence
//!
//! Handlers only see the [`BookStore`] trait; the concrete store is chosen in
//! `server::run` and injected through the router state.

mod sqlite;

pub use sqlite::SqliteBookStore;

use libris_core::books::{Book, NewBook, PageRequest};
use std::sync::Arc;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Connection pool error: {0}")]
    Pool(#[from] r2d2::Error),

    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Storage task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Storage for book records. Implementations block, see [`run_blocking`].
pub trait BookStore: Send + Sync {
    /// One page of books, newest publication year first
    fn list(&self, page: PageRequest) -> Result<Vec<Book>, StoreError>;

    fn count(&self) -> Result<u64, StoreError>;

    fn get(&self, id: i64) -> Result<Option<Book>, StoreError>;

    fn create(&self, book: &NewBook) -> Result<Book, StoreError>;

    /// Persist the fields of an existing book and refresh its `updated_at`.
    /// Returns `None` when no book had that id.
    fn update(&self, book: &Book) -> Result<Option<Book>, StoreError>;

    /// Returns `false` when no book had that id
    fn delete(&self, id: i64) -> Result<bool, StoreError>;
}

/// Run a store call on the blocking thread pool
pub async fn run_blocking<T, F>(store: &Arc<dyn BookStore>, f: F) -> Result<T, StoreError>
where
    T: Send + 'static,
    F: FnOnce(&dyn BookStore) -> Result<T, StoreError> + Send + 'static,
{
    let store = Arc::clone(store);
    tokio::task::spawn_blocking(move || f(store.as_ref())).await?
}

use super::{BookStore, StoreError};
use chrono::Utc;
use libris_core::books::{Book, NewBook, PageRequest};
use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::{params, OptionalExtension, Row};
use std::path::Path;

pub type ConnectionPool = Pool<SqliteConnectionManager>;

const MIGRATION: &str = "
CREATE TABLE IF NOT EXISTS books (
    id         INTEGER PRIMARY KEY AUTOINCREMENT,
    title      TEXT    NOT NULL,
    author     TEXT    NOT NULL,
    year       INTEGER NOT NULL,
    created_at TEXT    NOT NULL,
    updated_at TEXT    NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_books_year ON books (year DESC);
";

const BOOK_COLUMNS: &str = "id, title, author, year, created_at, updated_at";

/// SQLite-backed [`BookStore`] over an r2d2 connection pool
#[derive(Clone)]
pub struct SqliteBookStore {
    pool: ConnectionPool,
}

impl SqliteBookStore {
    /// Open (or create) a database file
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let manager = SqliteConnectionManager::file(path.as_ref()).with_init(|conn| {
            conn.execute_batch(
                "PRAGMA journal_mode = WAL;
                 PRAGMA synchronous = NORMAL;
                 PRAGMA busy_timeout = 5000;",
            )
        });

        let pool = Pool::builder().max_size(8).build(manager)?;
        Ok(Self { pool })
    }

    /// A private in-memory database.
    ///
    /// Every SQLite `:memory:` connection is its own database, so the pool holds
    /// exactly one connection and never recycles it.
    pub fn in_memory() -> Result<Self, StoreError> {
        let pool = Pool::builder()
            .max_size(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .build(SqliteConnectionManager::memory())?;
        Ok(Self { pool })
    }

    /// Create the `books` table if it does not exist yet
    pub fn migrate(&self) -> Result<(), StoreError> {
        let conn = self.pool.get()?;
        conn.execute_batch(MIGRATION)?;
        log::info!("Database migrated successfully");
        Ok(())
    }

    fn row_to_book(row: &Row) -> rusqlite::Result<Book> {
        Ok(Book {
            id: row.get(0)?,
            title: row.get(1)?,
            author: row.get(2)?,
            year: row.get(3)?,
            created_at: row.get(4)?,
            updated_at: row.get(5)?,
        })
    }
}

impl BookStore for SqliteBookStore {
    fn list(&self, page: PageRequest) -> Result<Vec<Book>, StoreError> {
        let conn = self.pool.get()?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {BOOK_COLUMNS} FROM books ORDER BY year DESC, id ASC LIMIT ?1 OFFSET ?2"
        ))?;
        let rows = stmt.query_map(
            params![i64::from(page.limit()), page.offset() as i64],
            Self::row_to_book,
        )?;

        let mut books = Vec::new();
        for book in rows {
            books.push(book?);
        }
        Ok(books)
    }

    fn count(&self) -> Result<u64, StoreError> {
        let conn = self.pool.get()?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM books", [], |row| row.get(0))?;
        Ok(count as u64)
    }

    fn get(&self, id: i64) -> Result<Option<Book>, StoreError> {
        let conn = self.pool.get()?;
        let book = conn
            .query_row(
                &format!("SELECT {BOOK_COLUMNS} FROM books WHERE id = ?1"),
                params![id],
                Self::row_to_book,
            )
            .optional()?;
        Ok(book)
    }

    fn create(&self, book: &NewBook) -> Result<Book, StoreError> {
        let conn = self.pool.get()?;
        let now = Utc::now();
        conn.execute(
            "INSERT INTO books (title, author, year, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![book.title, book.author, book.year, now, now],
        )?;

        Ok(Book {
            id: conn.last_insert_rowid(),
            title: book.title.clone(),
            author: book.author.clone(),
            year: book.year,
            created_at: now,
            updated_at: now,
        })
    }

    fn update(&self, book: &Book) -> Result<Option<Book>, StoreError> {
        let conn = self.pool.get()?;
        let now = Utc::now();
        let changed = conn.execute(
            "UPDATE books SET title = ?1, author = ?2, year = ?3, updated_at = ?4 WHERE id = ?5",
            params![book.title, book.author, book.year, now, book.id],
        )?;
        if changed == 0 {
            return Ok(None);
        }

        Ok(Some(Book {
            updated_at: now,
            ..book.clone()
        }))
    }

    fn delete(&self, id: i64) -> Result<bool, StoreError> {
        let conn = self.pool.get()?;
        let deleted = conn.execute("DELETE FROM books WHERE id = ?1", params![id])?;
        Ok(deleted > 0)
    }
}

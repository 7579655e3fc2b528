//! Book persistence behind a trait, with PostgreSQL and in-memory backends.

use crate::error::AppResult;
use crate::model::{Book, BookChanges, NewBook};
use async_trait::async_trait;
use std::fmt::Debug;
use std::sync::Arc;

pub mod memory;
pub mod postgres;

pub use memory::MemoryBookStore;
pub use postgres::{ensure_books_table, ensure_database_exists, PgBookStore};

/// Persistent collection of books keyed by isbn. Each method is a single store round-trip.
#[async_trait]
pub trait BookStore: Debug + Send + Sync {
    /// All books, ordered by title then isbn.
    async fn list(&self) -> AppResult<Vec<Book>>;

    async fn get(&self, isbn: &str) -> AppResult<Option<Book>>;

    /// Insert one book. Fails with `AppError::Conflict` when the isbn is taken.
    async fn insert(&self, book: NewBook) -> AppResult<Book>;

    /// Overwrite the supplied fields. Returns `None` if no row has this isbn.
    async fn update(&self, isbn: &str, changes: BookChanges) -> AppResult<Option<Book>>;

    /// Returns `true` if a row was removed.
    async fn delete(&self, isbn: &str) -> AppResult<bool>;

    /// Cheap round-trip used by the readiness probe.
    async fn ping(&self) -> AppResult<()>;

    /// Backend name reported by `/ready`.
    fn kind(&self) -> &'static str;
}

pub type BookStoreArc = Arc<dyn BookStore>;

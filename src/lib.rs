//! Books API: REST CRUD service for a books table in PostgreSQL.

pub mod config;
pub mod error;
pub mod handlers;
pub mod model;
pub mod openapi;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use config::{ServerConfig, StoreKind};
pub use error::{AppError, AppResult, ConfigError};
pub use model::{Book, BookChanges, NewBook};
pub use routes::{app_router, book_routes, common_routes_with_ready};
pub use service::BookService;
pub use state::AppState;
pub use store::{
    ensure_books_table, ensure_database_exists, BookStore, MemoryBookStore, PgBookStore,
};

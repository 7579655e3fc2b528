//! Book operations on top of a `BookStore`.

use crate::error::{AppError, AppResult};
use crate::model::{Book, BookChanges, NewBook};
use crate::service::validation::{parse_object, RequestValidator, BOOK_RULES};
use crate::store::BookStore;
use serde_json::{Map, Value};

pub struct BookService;

impl BookService {
    pub async fn list(store: &dyn BookStore) -> AppResult<Vec<Book>> {
        store.list().await
    }

    pub async fn get(store: &dyn BookStore, isbn: &str) -> AppResult<Book> {
        store.get(isbn).await?.ok_or_else(|| not_found(isbn))
    }

    /// Validate a complete book body and insert it.
    pub async fn create(store: &dyn BookStore, body: Map<String, Value>) -> AppResult<Book> {
        RequestValidator::validate(&body, BOOK_RULES)?;
        let new: NewBook = serde_json::from_value(Value::Object(body))
            .map_err(|e| AppError::Validation(e.to_string()))?;
        let book = store.insert(new).await?;
        tracing::info!(isbn = %book.isbn, "book created");
        Ok(book)
    }

    /// Existence is checked before the raw body is parsed, so an unknown isbn is always 404.
    pub async fn update(store: &dyn BookStore, isbn: &str, raw_body: &[u8]) -> AppResult<Book> {
        if store.get(isbn).await?.is_none() {
            return Err(not_found(isbn));
        }
        let changes = changes_from_body(isbn, parse_object(raw_body)?)?;
        let book = store
            .update(isbn, changes)
            .await?
            .ok_or_else(|| not_found(isbn))?;
        tracing::info!(isbn = %book.isbn, "book updated");
        Ok(book)
    }

    pub async fn delete(store: &dyn BookStore, isbn: &str) -> AppResult<()> {
        if !store.delete(isbn).await? {
            return Err(not_found(isbn));
        }
        tracing::info!(isbn, "book deleted");
        Ok(())
    }
}

fn not_found(isbn: &str) -> AppError {
    AppError::NotFound(format!("book with isbn '{}'", isbn))
}

/// `isbn` may be echoed back in the body but never changed.
fn changes_from_body(isbn: &str, mut body: Map<String, Value>) -> AppResult<BookChanges> {
    if let Some(body_isbn) = body.remove("isbn") {
        if body_isbn.as_str() != Some(isbn) {
            return Err(AppError::Validation("isbn cannot be changed".into()));
        }
    }
    RequestValidator::validate_partial(&body, BOOK_RULES)?;
    let changes: BookChanges = serde_json::from_value(Value::Object(body))
        .map_err(|e| AppError::Validation(e.to_string()))?;
    if changes.is_empty() {
        return Err(AppError::BadRequest("no fields to update".into()));
    }
    Ok(changes)
}

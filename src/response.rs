//! Response envelope helpers.

use crate::model::Book;
use axum::{http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const BOOK_DELETED: &str = "Book deleted";

/// `{ "book": Book }`
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct BookEnvelope {
    pub book: Book,
}

/// `{ "books": [Book, ...] }`
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct BookListEnvelope {
    pub books: Vec<Book>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageBody {
    pub message: String,
}

pub fn book_created(book: Book) -> (StatusCode, Json<BookEnvelope>) {
    (StatusCode::CREATED, Json(BookEnvelope { book }))
}

pub fn book_ok(book: Book) -> (StatusCode, Json<BookEnvelope>) {
    (StatusCode::OK, Json(BookEnvelope { book }))
}

pub fn books_ok(books: Vec<Book>) -> (StatusCode, Json<BookListEnvelope>) {
    (StatusCode::OK, Json(BookListEnvelope { books }))
}

pub fn message_ok(message: &str) -> (StatusCode, Json<MessageBody>) {
    (
        StatusCode::OK,
        Json(MessageBody {
            message: message.to_string(),
        }),
    )
}

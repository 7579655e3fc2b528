//! Book CRUD handlers: list, read, create, update, delete.

use crate::error::{AppError, ErrorBody};
use crate::model::{BookChanges, NewBook};
use crate::response::{
    book_created, book_ok, books_ok, message_ok, BookEnvelope, BookListEnvelope, MessageBody,
    BOOK_DELETED,
};
use crate::service::{parse_object, BookService};
use crate::state::AppState;
use axum::{
    body::Bytes,
    extract::{Path, State},
    response::IntoResponse,
};

#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    responses((status = 200, description = "Every stored book", body = BookListEnvelope))
)]
pub async fn list_books(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let books = BookService::list(state.store.as_ref()).await?;
    Ok(books_ok(books))
}

#[utoipa::path(
    get,
    path = "/books/{isbn}",
    tag = "books",
    params(("isbn" = String, Path, description = "Book isbn")),
    responses(
        (status = 200, description = "The book", body = BookEnvelope),
        (status = 404, description = "No book has this isbn", body = ErrorBody)
    )
)]
pub async fn get_book(
    State(state): State<AppState>,
    Path(isbn): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let book = BookService::get(state.store.as_ref(), &isbn).await?;
    Ok(book_ok(book))
}

/// Raw body so malformed JSON and any content type still get the error envelope.
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body = NewBook,
    responses(
        (status = 201, description = "Stored book", body = BookEnvelope),
        (status = 400, description = "Invalid payload", body = ErrorBody),
        (status = 409, description = "isbn already exists", body = ErrorBody)
    )
)]
pub async fn create_book(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let body = parse_object(&body)?;
    let book = BookService::create(state.store.as_ref(), body).await?;
    Ok(book_created(book))
}

/// The body is taken raw so that a missing isbn answers 404 before any body parsing.
#[utoipa::path(
    put,
    path = "/books/{isbn}",
    tag = "books",
    params(("isbn" = String, Path, description = "Book isbn")),
    request_body = BookChanges,
    responses(
        (status = 200, description = "Updated book", body = BookEnvelope),
        (status = 400, description = "Invalid payload", body = ErrorBody),
        (status = 404, description = "No book has this isbn", body = ErrorBody)
    )
)]
pub async fn update_book(
    State(state): State<AppState>,
    Path(isbn): Path<String>,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let book = BookService::update(state.store.as_ref(), &isbn, &body).await?;
    Ok(book_ok(book))
}

#[utoipa::path(
    delete,
    path = "/books/{isbn}",
    tag = "books",
    params(("isbn" = String, Path, description = "Book isbn")),
    responses(
        (status = 200, description = "Book removed", body = MessageBody),
        (status = 404, description = "No book has this isbn", body = ErrorBody)
    )
)]
pub async fn delete_book(
    State(state): State<AppState>,
    Path(isbn): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    BookService::delete(state.store.as_ref(), &isbn).await?;
    Ok(message_ok(BOOK_DELETED))
}

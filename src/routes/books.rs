//! Book CRUD routes.

use crate::handlers::books::{create_book, delete_book, get_book, list_books, update_book};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn book_routes(state: AppState) -> Router {
    Router::new()
        .route("/books", get(list_books).post(create_book))
        .route(
            "/books/:isbn",
            get(get_book).put(update_book).delete(delete_book),
        )
        .with_state(state)
}

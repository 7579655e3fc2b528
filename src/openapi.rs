//! OpenAPI document for the books routes.

use crate::error::{ErrorBody, ErrorDetail};
use crate::model::{Book, BookChanges, NewBook};
use crate::response::{BookEnvelope, BookListEnvelope, MessageBody};
use axum::Json;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::books::list_books,
        crate::handlers::books::get_book,
        crate::handlers::books::create_book,
        crate::handlers::books::update_book,
        crate::handlers::books::delete_book,
    ),
    components(schemas(
        Book,
        NewBook,
        BookChanges,
        BookEnvelope,
        BookListEnvelope,
        MessageBody,
        ErrorBody,
        ErrorDetail,
    )),
    tags((name = "books", description = "Book CRUD"))
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

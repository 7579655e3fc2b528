//! Router assembly.

mod books;
mod common;

pub use books::book_routes;
pub use common::common_routes_with_ready;

use crate::openapi::openapi_json;
use crate::state::AppState;
use axum::{routing::get, Router};
use tower::ServiceBuilder;
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};

/// Full application router: books, operational routes, OpenAPI document, tracing and body limit.
pub fn app_router(state: AppState, body_limit: usize) -> Router {
    Router::new()
        .merge(common_routes_with_ready(state.clone()))
        .merge(book_routes(state))
        .route("/openapi.json", get(openapi_json))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(RequestBodyLimitLayer::new(body_limit)),
        )
}

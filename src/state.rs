//! Shared application state for all routes.

use crate::store::{BookStore, BookStoreArc};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: BookStoreArc,
}

impl AppState {
    pub fn new<S: BookStore + 'static>(store: S) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}

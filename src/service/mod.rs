//! BookService: book operations with request validation.

mod books;
mod validation;
pub use books::BookService;
pub use validation::{body_to_map, parse_object, FieldKind, FieldRule, RequestValidator, BOOK_RULES};

//! Book entity and its create/update payloads.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A bibliographic record keyed by `isbn`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Book {
    pub isbn: String,
    pub amazon_url: String,
    pub author: String,
    pub language: String,
    pub pages: i32,
    pub publisher: String,
    pub title: String,
    pub year: i32,
}

/// Create payload. Every field is required, including the caller-chosen `isbn`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct NewBook {
    pub isbn: String,
    pub amazon_url: String,
    pub author: String,
    pub language: String,
    pub pages: i32,
    pub publisher: String,
    pub title: String,
    pub year: i32,
}

impl From<NewBook> for Book {
    fn from(new: NewBook) -> Self {
        Self {
            isbn: new.isbn,
            amazon_url: new.amazon_url,
            author: new.author,
            language: new.language,
            pages: new.pages,
            publisher: new.publisher,
            title: new.title,
            year: new.year,
        }
    }
}

/// Update payload. Only supplied fields overwrite the stored row; `isbn` never changes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct BookChanges {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amazon_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pages: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
}

impl BookChanges {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Overwrite the fields of `book` that this change set supplies.
    pub fn apply_to(self, book: &mut Book) {
        if let Some(amazon_url) = self.amazon_url {
            book.amazon_url = amazon_url;
        }
        if let Some(author) = self.author {
            book.author = author;
        }
        if let Some(language) = self.language {
            book.language = language;
        }
        if let Some(pages) = self.pages {
            book.pages = pages;
        }
        if let Some(publisher) = self.publisher {
            book.publisher = publisher;
        }
        if let Some(title) = self.title {
            book.title = title;
        }
        if let Some(year) = self.year {
            book.year = year;
        }
    }
}

//! In-memory book store.

use crate::error::{AppError, AppResult};
use crate::model::{Book, BookChanges, NewBook};
use crate::store::BookStore;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Debug, Default)]
pub struct MemoryBookStore {
    books: Arc<RwLock<HashMap<String, Book>>>,
}

impl MemoryBookStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with `books`.
    pub fn with_data(books: Vec<Book>) -> Self {
        Self {
            books: Arc::new(RwLock::new(
                books.into_iter().map(|book| (book.isbn.clone(), book)).collect(),
            )),
        }
    }
}

#[async_trait]
impl BookStore for MemoryBookStore {
    async fn list(&self) -> AppResult<Vec<Book>> {
        let books = self.books.read().await;
        let mut out: Vec<Book> = books.values().cloned().collect();
        out.sort_by(|a, b| a.title.cmp(&b.title).then_with(|| a.isbn.cmp(&b.isbn)));
        Ok(out)
    }

    async fn get(&self, isbn: &str) -> AppResult<Option<Book>> {
        Ok(self.books.read().await.get(isbn).cloned())
    }

    async fn insert(&self, book: NewBook) -> AppResult<Book> {
        let mut books = self.books.write().await;
        if books.contains_key(&book.isbn) {
            return Err(AppError::Conflict(format!(
                "book with isbn '{}' already exists",
                book.isbn
            )));
        }
        let book = Book::from(book);
        books.insert(book.isbn.clone(), book.clone());
        Ok(book)
    }

    async fn update(&self, isbn: &str, changes: BookChanges) -> AppResult<Option<Book>> {
        let mut books = self.books.write().await;
        Ok(books.get_mut(isbn).map(|book| {
            changes.apply_to(book);
            book.clone()
        }))
    }

    async fn delete(&self, isbn: &str) -> AppResult<bool> {
        Ok(self.books.write().await.remove(isbn).is_some())
    }

    async fn ping(&self) -> AppResult<()> {
        Ok(())
    }

    fn kind(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_book(isbn: &str, title: &str) -> NewBook {
        NewBook {
            isbn: isbn.into(),
            amazon_url: "http://a.co/eobPtX2".into(),
            author: "TestAuthor".into(),
            language: "english".into(),
            pages: 457,
            publisher: "TestPublisher".into(),
            title: title.into(),
            year: 2005,
        }
    }

    #[tokio::test]
    async fn insert_then_get() {
        let store = MemoryBookStore::new();
        let created = store.insert(new_book("0691161518", "TestBook")).await.unwrap();
        let loaded = store.get("0691161518").await.unwrap().unwrap();
        assert_eq!(created, loaded);
        assert!(store.get("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn duplicate_isbn_conflicts() {
        let store = MemoryBookStore::new();
        store.insert(new_book("1", "A")).await.unwrap();
        let err = store.insert(new_book("1", "B")).await.unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
        assert_eq!(store.get("1").await.unwrap().unwrap().title, "A");
    }

    #[tokio::test]
    async fn list_orders_by_title_then_isbn() {
        let store = MemoryBookStore::with_data(vec![
            new_book("3", "Beta").into(),
            new_book("2", "Alpha").into(),
            new_book("1", "Beta").into(),
        ]);
        let isbns: Vec<String> = store
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|b| b.isbn)
            .collect();
        assert_eq!(isbns, vec!["2", "1", "3"]);
    }

    #[tokio::test]
    async fn update_missing_writes_nothing() {
        let store = MemoryBookStore::new();
        let changes = BookChanges {
            title: Some("New".into()),
            ..Default::default()
        };
        assert!(store.update("missing", changes).await.unwrap().is_none());
        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn delete_reports_removal() {
        let store = MemoryBookStore::with_data(vec![new_book("1", "A").into()]);
        assert!(store.delete("1").await.unwrap());
        assert!(!store.delete("1").await.unwrap());
        assert!(store.get("1").await.unwrap().is_none());
    }
}

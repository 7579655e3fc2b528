//! PostgreSQL book store and database bootstrap.

use crate::error::{AppError, AppResult, ConfigError};
use crate::model::{Book, BookChanges, NewBook};
use crate::store::BookStore;
use async_trait::async_trait;
use sqlx::postgres::{PgConnectOptions, PgConnection};
use sqlx::ConnectOptions;
use sqlx::PgPool;
use std::str::FromStr;

const BOOK_COLUMNS: &str = "isbn, amazon_url, author, language, pages, publisher, title, year";

/// Create the `books` table if it does not exist yet.
pub async fn ensure_books_table(pool: &PgPool) -> Result<(), AppError> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS books (
            isbn TEXT PRIMARY KEY,
            amazon_url TEXT NOT NULL,
            author TEXT NOT NULL,
            language TEXT NOT NULL,
            pages INTEGER NOT NULL,
            publisher TEXT NOT NULL,
            title TEXT NOT NULL,
            year INTEGER NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;
    Ok(())
}

/// Ensure the database in `database_url` exists; create it if not. Connects to the
/// default `postgres` database to run CREATE DATABASE. Call before creating the main pool.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), AppError> {
    let Some((admin, db_name)) = admin_target(database_url)? else {
        return Ok(());
    };
    let mut conn: PgConnection = admin.connect().await.map_err(AppError::Db)?;
    let exists: (bool,) =
        sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
            .bind(&db_name)
            .fetch_one(&mut conn)
            .await
            .map_err(AppError::Db)?;
    if !exists.0 {
        tracing::info!(database = %db_name, "creating database");
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&db_name)))
            .execute(&mut conn)
            .await
            .map_err(AppError::Db)?;
    }
    Ok(())
}

/// Options for the `postgres` maintenance database plus the database `database_url` names.
/// `None` when the URL names no database, or names `postgres` itself.
fn admin_target(database_url: &str) -> Result<Option<(PgConnectOptions, String)>, AppError> {
    let opts = PgConnectOptions::from_str(database_url).map_err(|e| ConfigError::Invalid {
        key: "DATABASE_URL",
        value: e.to_string(),
    })?;
    let db_name = match opts.get_database() {
        Some(name) if !name.is_empty() && name != "postgres" => name.to_string(),
        _ => return Ok(None),
    };
    Ok(Some((opts.database("postgres"), db_name)))
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

#[derive(Debug, Clone)]
pub struct PgBookStore {
    pool: PgPool,
}

impl PgBookStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl BookStore for PgBookStore {
    async fn list(&self) -> AppResult<Vec<Book>> {
        let sql = format!("SELECT {} FROM books ORDER BY title, isbn", BOOK_COLUMNS);
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, Book>(&sql).fetch_all(&self.pool).await?;
        Ok(rows)
    }

    async fn get(&self, isbn: &str) -> AppResult<Option<Book>> {
        let sql = format!("SELECT {} FROM books WHERE isbn = $1", BOOK_COLUMNS);
        tracing::debug!(sql = %sql, isbn, "query");
        let row = sqlx::query_as::<_, Book>(&sql)
            .bind(isbn)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn insert(&self, book: NewBook) -> AppResult<Book> {
        let sql = format!(
            "INSERT INTO books ({cols}) VALUES ($1, $2, $3, $4, $5, $6, $7, $8) RETURNING {cols}",
            cols = BOOK_COLUMNS
        );
        tracing::debug!(sql = %sql, isbn = %book.isbn, "query");
        let result = sqlx::query_as::<_, Book>(&sql)
            .bind(&book.isbn)
            .bind(&book.amazon_url)
            .bind(&book.author)
            .bind(&book.language)
            .bind(book.pages)
            .bind(&book.publisher)
            .bind(&book.title)
            .bind(book.year)
            .fetch_one(&self.pool)
            .await;
        match result {
            Ok(row) => Ok(row),
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => Err(AppError::Conflict(
                format!("book with isbn '{}' already exists", book.isbn),
            )),
            Err(e) => Err(e.into()),
        }
    }

    async fn update(&self, isbn: &str, changes: BookChanges) -> AppResult<Option<Book>> {
        let sql = format!(
            "UPDATE books SET \
             amazon_url = COALESCE($2, amazon_url), \
             author = COALESCE($3, author), \
             language = COALESCE($4, language), \
             pages = COALESCE($5, pages), \
             publisher = COALESCE($6, publisher), \
             title = COALESCE($7, title), \
             year = COALESCE($8, year) \
             WHERE isbn = $1 RETURNING {}",
            BOOK_COLUMNS
        );
        tracing::debug!(sql = %sql, isbn, "query");
        let row = sqlx::query_as::<_, Book>(&sql)
            .bind(isbn)
            .bind(changes.amazon_url)
            .bind(changes.author)
            .bind(changes.language)
            .bind(changes.pages)
            .bind(changes.publisher)
            .bind(changes.title)
            .bind(changes.year)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn delete(&self, isbn: &str) -> AppResult<bool> {
        let sql = "DELETE FROM books WHERE isbn = $1";
        tracing::debug!(sql = %sql, isbn, "query");
        let result = sqlx::query(sql).bind(isbn).execute(&self.pool).await?;
        Ok(result.rows_affected() > 0)
    }

    async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    fn kind(&self) -> &'static str {
        "postgres"
    }
}

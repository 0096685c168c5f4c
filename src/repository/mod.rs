//! Repository layer for book storage
//!
//! Handlers never touch the database directly: everything goes through the
//! [`BookStore`] capability set so the backend can be swapped or mocked.

pub mod books;
pub mod memory;

use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::book::{Book, NewBook, UpdateBook},
};

pub use books::PgBookStore;
pub use memory::MemoryBookStore;

/// Book Record Store operations
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookStore: Send + Sync {
    /// All books, order left to the store
    async fn list(&self) -> AppResult<Vec<Book>>;

    async fn get(&self, id: Uuid) -> AppResult<Book>;

    /// Insert a book, assigning its `id`
    async fn create(&self, data: &NewBook) -> AppResult<Book>;

    async fn update(&self, id: Uuid, data: &UpdateBook) -> AppResult<Book>;

    async fn delete(&self, id: Uuid) -> AppResult<()>;

    /// Connectivity check used by the readiness check
    async fn ping(&self) -> AppResult<()> {
        Ok(())
    }
}

pub(crate) fn not_found(id: Uuid) -> crate::error::AppError {
    crate::error::AppError::NotFound(format!("Book {} not found", id))
}

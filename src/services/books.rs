//! Book catalog service

use std::sync::Arc;

use uuid::Uuid;

use crate::{
    error::AppResult,
    models::book::{Book, CreateBook, NewBook, UpdateBook},
    repository::BookStore,
};

#[derive(Clone)]
pub struct BookService {
    store: Arc<dyn BookStore>,
}

impl BookService {
    pub fn new(store: Arc<dyn BookStore>) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> AppResult<Vec<Book>> {
        let books = self.store.list().await?;
        tracing::debug!("Listed {} books", books.len());
        Ok(books)
    }

    pub async fn get(&self, id: Uuid) -> AppResult<Book> {
        self.store.get(id).await
    }

    /// Check required fields, then insert
    pub async fn create(&self, data: CreateBook) -> AppResult<Book> {
        let new_book = NewBook::try_from(data)?;
        let book = self.store.create(&new_book).await?;
        tracing::info!("Created book id={} title={:?}", book.id, book.title);
        Ok(book)
    }

    pub async fn update(&self, id: Uuid, data: &UpdateBook) -> AppResult<Book> {
        let book = self.store.update(id, data).await?;
        tracing::info!("Updated book id={}", id);
        Ok(book)
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.store.delete(id).await?;
        tracing::info!("Deleted book id={}", id);
        Ok(())
    }

    pub async fn ping(&self) -> AppResult<()> {
        self.store.ping().await
    }
}

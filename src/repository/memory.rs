//! In-process book store, used for tests and database-less runs

use async_trait::async_trait;
use chrono::Utc;
use indexmap::IndexMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{not_found, BookStore};
use crate::{
    error::AppResult,
    models::book::{Book, NewBook, UpdateBook},
};

/// Books keyed by id, kept in insertion order
#[derive(Default)]
pub struct MemoryBookStore {
    books: RwLock<IndexMap<Uuid, Book>>,
}

impl MemoryBookStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BookStore for MemoryBookStore {
    async fn list(&self) -> AppResult<Vec<Book>> {
        Ok(self.books.read().await.values().cloned().collect())
    }

    async fn get(&self, id: Uuid) -> AppResult<Book> {
        self.books
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| not_found(id))
    }

    async fn create(&self, data: &NewBook) -> AppResult<Book> {
        let now = Utc::now();
        let book = Book {
            id: Uuid::new_v4(),
            title: data.title.clone(),
            author: data.author.clone(),
            publish_year: data.publish_year,
            created_at: now,
            updated_at: now,
        };
        self.books.write().await.insert(book.id, book.clone());
        Ok(book)
    }

    async fn update(&self, id: Uuid, data: &UpdateBook) -> AppResult<Book> {
        let mut books = self.books.write().await;
        let book = books.get_mut(&id).ok_or_else(|| not_found(id))?;
        book.apply(data);
        Ok(book.clone())
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        // shift_remove keeps the remaining books in insertion order
        self.books
            .write()
            .await
            .shift_remove(&id)
            .map(|_| ())
            .ok_or_else(|| not_found(id))
    }
}

//! HTTP client for the Book Haven API

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use uuid::Uuid;

use crate::{
    config::ClientConfig,
    error::{AppError, AppResult, ErrorResponse},
    models::book::{Book, BookList, CreateBook, MessageResponse, UpdateBook},
};

/// Where a catalog session gets its books from
#[async_trait]
pub trait BookSource: Send + Sync {
    async fn fetch_books(&self) -> AppResult<Vec<Book>>;
}

#[derive(Clone)]
pub struct BookClient {
    http: Client,
    base_url: String,
}

impl BookClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(config.api_url.as_str())
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn list(&self) -> AppResult<Vec<Book>> {
        let response = self.http.get(self.url("/books")).send().await?;
        let list: BookList = read_json(response).await?;
        Ok(list.data)
    }

    pub async fn get(&self, id: Uuid) -> AppResult<Book> {
        let response = self.http.get(self.url(&format!("/books/{}", id))).send().await?;
        read_json(response).await
    }

    pub async fn create(&self, data: &CreateBook) -> AppResult<Book> {
        let response = self.http.post(self.url("/books")).json(data).send().await?;
        read_json(response).await
    }

    pub async fn update(&self, id: Uuid, data: &UpdateBook) -> AppResult<Book> {
        let response = self
            .http
            .put(self.url(&format!("/books/{}", id)))
            .json(data)
            .send()
            .await?;
        read_json(response).await
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<String> {
        let response = self.http.delete(self.url(&format!("/books/{}", id))).send().await?;
        let confirmation: MessageResponse = read_json(response).await?;
        Ok(confirmation.message)
    }
}

#[async_trait]
impl BookSource for BookClient {
    async fn fetch_books(&self) -> AppResult<Vec<Book>> {
        self.list().await
    }
}

/// Decode a success body, or map the API's error body back onto `AppError`
async fn read_json<T: serde::de::DeserializeOwned>(response: Response) -> AppResult<T> {
    let status = response.status();
    if status.is_success() {
        return Ok(response.json().await?);
    }

    let message = match response.json::<ErrorResponse>().await {
        Ok(body) => body.message,
        Err(_) => status.to_string(),
    };
    Err(match status {
        StatusCode::NOT_FOUND => AppError::NotFound(message),
        StatusCode::BAD_REQUEST => AppError::BadRequest(message),
        _ => AppError::Internal(format!("API returned {}: {}", status, message)),
    })
}

//! Book model and request schemas

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::error::AppError;

/// Book record as stored and served
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    /// Identifier assigned by the store on creation
    pub id: Uuid,
    pub title: String,
    pub author: String,
    pub publish_year: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Body of `GET /books`
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct BookList {
    /// Number of books in `data`
    pub count: usize,
    pub data: Vec<Book>,
}

impl From<Vec<Book>> for BookList {
    fn from(data: Vec<Book>) -> Self {
        Self {
            count: data.len(),
            data,
        }
    }
}

/// Confirmation body for operations that return no record
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

/// Create book request.
///
/// Fields are optional at the serde level so a missing field surfaces as a
/// validation message rather than a generic deserialization failure.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBook {
    #[validate(
        required(message = "title is required"),
        length(min = 1, message = "title must not be empty")
    )]
    pub title: Option<String>,
    #[validate(
        required(message = "author is required"),
        length(min = 1, message = "author must not be empty")
    )]
    pub author: Option<String>,
    #[validate(required(message = "publishYear is required"))]
    pub publish_year: Option<i32>,
}

impl CreateBook {
    pub fn new(title: impl Into<String>, author: impl Into<String>, publish_year: i32) -> Self {
        Self {
            title: Some(title.into()),
            author: Some(author.into()),
            publish_year: Some(publish_year),
        }
    }
}

/// Update book request, absent fields are left untouched
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBook {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, message = "author must not be empty"))]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publish_year: Option<i32>,
}

/// Fully populated insert payload handed to a `BookStore`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub publish_year: i32,
}

impl TryFrom<CreateBook> for NewBook {
    type Error = AppError;

    fn try_from(data: CreateBook) -> Result<Self, Self::Error> {
        data.validate()?;
        match (data.title, data.author, data.publish_year) {
            (Some(title), Some(author), Some(publish_year)) => Ok(Self {
                title,
                author,
                publish_year,
            }),
            _ => Err(AppError::BadRequest(
                "Send all required fields: title, author, publishYear".to_string(),
            )),
        }
    }
}

impl Book {
    /// Apply a partial update in place, refreshing `updated_at`
    pub fn apply(&mut self, data: &UpdateBook) {
        if let Some(ref title) = data.title {
            self.title = title.clone();
        }
        if let Some(ref author) = data.author {
            self.author = author.clone();
        }
        if let Some(publish_year) = data.publish_year {
            self.publish_year = publish_year;
        }
        self.updated_at = Utc::now();
    }
}

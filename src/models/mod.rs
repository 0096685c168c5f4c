//! Data models for Book Haven

pub mod book;

pub use book::{Book, BookList, CreateBook, MessageResponse, NewBook, UpdateBook};

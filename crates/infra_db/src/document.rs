//! Stored representation of a book
//!
//! Books are stored with their ISBN duplicated into `_id`, so the primary key
//! index doubles as the uniqueness constraint on the ISBN.

use serde::{Deserialize, Serialize};

use domain_book::Book;

/// A book as stored in the collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookDocument {
    #[serde(rename = "_id")]
    pub id: String,
    pub isbn: String,
    pub title: String,
    pub author: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edition: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_year: Option<i32>,
}

impl From<&Book> for BookDocument {
    fn from(book: &Book) -> Self {
        Self {
            id: book.isbn().to_string(),
            isbn: book.isbn().to_string(),
            title: book.title.clone(),
            author: book.author.clone(),
            publisher: book.publisher.clone(),
            language: book.language.clone(),
            edition: book.edition,
            published_year: book.published_year,
        }
    }
}

impl From<BookDocument> for Book {
    fn from(document: BookDocument) -> Self {
        let mut book = Book::new(document.isbn, document.title, document.author);
        book.publisher = document.publisher;
        book.language = document.language;
        book.edition = document.edition;
        book.published_year = document.published_year;
        book
    }
}

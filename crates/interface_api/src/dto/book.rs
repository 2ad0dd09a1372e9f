//! Book DTOs
//!
//! Responses serialize `domain_book::Book` directly; only request bodies
//! need their own types. The update body has no `isbn` field because the
//! key comes from the path and cannot be changed.

use serde::Deserialize;
use validator::Validate;

use domain_book::Book;

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookRequest {
    #[validate(length(min = 1, max = 32))]
    pub isbn: String,
    #[validate(length(min = 1))]
    pub title: String,
    #[validate(length(min = 1))]
    pub author: String,
    pub publisher: Option<String>,
    pub language: Option<String>,
    #[validate(range(min = 1))]
    pub edition: Option<i32>,
    pub published_year: Option<i32>,
}

impl CreateBookRequest {
    pub fn into_book(self) -> Book {
        let mut book = Book::new(self.isbn, self.title, self.author);
        book.publisher = self.publisher;
        book.language = self.language;
        book.edition = self.edition;
        book.published_year = self.published_year;
        book
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateBookRequest {
    #[validate(length(min = 1))]
    pub title: String,
    #[validate(length(min = 1))]
    pub author: String,
    pub publisher: Option<String>,
    pub language: Option<String>,
    #[validate(range(min = 1))]
    pub edition: Option<i32>,
    pub published_year: Option<i32>,
}

impl UpdateBookRequest {
    /// Builds the replacement record for the book stored under `isbn`
    pub fn into_book(self, isbn: &str) -> Book {
        let mut book = Book::new(isbn, self.title, self.author);
        book.publisher = self.publisher;
        book.language = self.language;
        book.edition = self.edition;
        book.published_year = self.published_year;
        book
    }
}

//! Test Data Builders
//!
//! Provides a builder for books with generated defaults. Tests set only the
//! fields they care about; every built book gets a fresh ISBN unless one is
//! supplied.

use domain_book::Book;
use fake::faker::lorem::en::Words;
use fake::faker::name::en::Name;
use fake::Fake;
use uuid::Uuid;

/// Generates an ISBN-shaped key that is unique across the test run
pub fn unique_isbn() -> String {
    let digits = Uuid::new_v4().as_u128() % 10_000_000_000;
    format!("978-{:010}", digits)
}

/// Builder for constructing test books
pub struct TestBookBuilder {
    isbn: String,
    title: String,
    author: String,
    publisher: Option<String>,
    language: Option<String>,
    edition: Option<i32>,
    published_year: Option<i32>,
}

impl Default for TestBookBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBookBuilder {
    /// Creates a new builder with generated title and author
    pub fn new() -> Self {
        let words: Vec<String> = Words(2..5).fake();
        Self {
            isbn: unique_isbn(),
            title: words.join(" "),
            author: Name().fake(),
            publisher: None,
            language: None,
            edition: None,
            published_year: None,
        }
    }

    pub fn with_isbn(mut self, isbn: impl Into<String>) -> Self {
        self.isbn = isbn.into();
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    pub fn with_publisher(mut self, publisher: impl Into<String>) -> Self {
        self.publisher = Some(publisher.into());
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn with_edition(mut self, edition: i32) -> Self {
        self.edition = Some(edition);
        self
    }

    pub fn with_published_year(mut self, year: i32) -> Self {
        self.published_year = Some(year);
        self
    }

    /// Builds the book
    pub fn build(self) -> Book {
        let mut book = Book::new(self.isbn, self.title, self.author);
        book.publisher = self.publisher;
        book.language = self.language;
        book.edition = self.edition;
        book.published_year = self.published_year;
        book
    }

    /// Builds `count` books, each with its own generated ISBN and title
    pub fn build_many(count: usize) -> Vec<Book> {
        (0..count).map(|_| Self::new().build()).collect()
    }
}

//! Book model
//!
//! A `Book` is identified by its ISBN. The ISBN can only be supplied at
//! construction time; the descriptive fields are public and may be edited
//! freely before an update is issued.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::BookError;

/// Upper bound on the stored ISBN length, hyphens included
pub const MAX_ISBN_LENGTH: usize = 32;

/// A catalogue entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    isbn: String,
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

impl Book {
    /// Creates a book with the mandatory fields set and no optional details
    pub fn new(
        isbn: impl Into<String>,
        title: impl Into<String>,
        author: impl Into<String>,
    ) -> Self {
        Self {
            isbn: isbn.into(),
            title: title.into(),
            author: author.into(),
            publisher: None,
            language: None,
            edition: None,
            published_year: None,
        }
    }

    /// Returns the identifying key of this book
    pub fn isbn(&self) -> &str {
        &self.isbn
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

    /// Checks the invariants every stored book must satisfy
    ///
    /// # Errors
    ///
    /// - `BookError::InvalidIsbn` if the ISBN is blank, longer than
    ///   `MAX_ISBN_LENGTH`, or contains whitespace
    /// - `BookError::MissingField` if the title or author is blank
    /// - `BookError::InvalidData` if the edition is not positive
    pub fn validate(&self) -> Result<(), BookError> {
        if self.isbn.trim().is_empty() {
            return Err(BookError::invalid_isbn("isbn must not be blank"));
        }
        if self.isbn.chars().count() > MAX_ISBN_LENGTH {
            return Err(BookError::invalid_isbn(format!(
                "isbn must be at most {} characters",
                MAX_ISBN_LENGTH
            )));
        }
        if self.isbn.chars().any(char::is_whitespace) {
            return Err(BookError::invalid_isbn("isbn must not contain whitespace"));
        }
        if self.title.trim().is_empty() {
            return Err(BookError::MissingField("title"));
        }
        if self.author.trim().is_empty() {
            return Err(BookError::MissingField("author"));
        }
        if let Some(edition) = self.edition {
            if edition < 1 {
                return Err(BookError::invalid(format!(
                    "edition must be positive, got {}",
                    edition
                )));
            }
        }
        Ok(())
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Book[isbn={}, title={}, author={}]", self.isbn, self.title, self.author)
    }
}

//! Book domain errors

use core_kernel::PortError;
use thiserror::Error;

/// Errors that can occur in the book domain
#[derive(Debug, Error)]
pub enum BookError {
    /// The ISBN is blank, too long, or contains whitespace
    #[error("Invalid isbn: {0}")]
    InvalidIsbn(String),

    /// A required descriptive field is blank
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// Invalid book data provided
    #[error("Invalid book data: {0}")]
    InvalidData(String),
}

impl BookError {
    /// Creates an InvalidIsbn error with a message
    pub fn invalid_isbn(message: impl Into<String>) -> Self {
        BookError::InvalidIsbn(message.into())
    }

    /// Creates an InvalidData error with a message
    pub fn invalid(message: impl Into<String>) -> Self {
        BookError::InvalidData(message.into())
    }

    /// Name of the offending field, when known
    pub fn field(&self) -> Option<&'static str> {
        match self {
            BookError::InvalidIsbn(_) => Some("isbn"),
            BookError::MissingField(field) => Some(field),
            BookError::InvalidData(_) => None,
        }
    }
}

impl From<BookError> for PortError {
    fn from(error: BookError) -> Self {
        match error.field() {
            Some(field) => PortError::validation_field(error.to_string(), field),
            None => PortError::validation(error.to_string()),
        }
    }
}

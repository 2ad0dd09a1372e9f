//! Book Domain
//!
//! This crate holds the catalogue model of the bookshelf: the `Book` record,
//! its validation rules, and the `BookPort` trait that storage adapters
//! implement.
//!
//! The ISBN is the identifying key of a book. It is fixed when the record is
//! constructed and is used as the primary key by every storage adapter.
//!
//! # Examples
//!
//! ```rust
//! use domain_book::Book;
//!
//! let book = Book::new("978-0132350884", "Clean Code", "Robert C. Martin")
//!     .with_publisher("Prentice Hall")
//!     .with_published_year(2008);
//!
//! assert!(book.validate().is_ok());
//! assert_eq!(book.isbn(), "978-0132350884");
//! ```

pub mod book;
pub mod error;
pub mod ports;

pub use book::{Book, MAX_ISBN_LENGTH};
pub use error::BookError;
pub use ports::{BookPort, BookPortExt};
#[cfg(any(test, feature = "mock"))]
pub use ports::mock::MockBookPort;

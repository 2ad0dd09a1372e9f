//! Book Domain Ports
//!
//! This module defines the port through which the rest of the system stores
//! and retrieves books, so the storage backend can be swapped (MongoDB in
//! production, in-memory in tests).
//!
//! # Semantics
//!
//! - `create` returns `None` when a book with the same ISBN already exists;
//!   the existing record is left untouched.
//! - `update` and `read_by_isbn` return `None` when no book has that ISBN.
//! - `delete` returns `false` when nothing was removed.
//! - Any other storage failure is returned as a `PortError`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use domain_book::{Book, BookPort};
//! use std::sync::Arc;
//!
//! async fn register(port: Arc<dyn BookPort>, book: Book) -> Result<bool, PortError> {
//!     Ok(port.create(book).await?.is_some())
//! }
//! ```

use async_trait::async_trait;

use core_kernel::{DomainPort, HealthCheckable, PortError};

use crate::book::Book;

/// The storage port for books
///
/// All methods are async and return `Result<T, PortError>` for consistent
/// error handling across adapter implementations.
#[async_trait]
pub trait BookPort: DomainPort + HealthCheckable {
    /// Stores a new book keyed by its ISBN
    ///
    /// # Returns
    ///
    /// The created book, or `None` if the ISBN is already taken
    ///
    /// # Errors
    ///
    /// `PortError::Validation` if the book fails `Book::validate`
    async fn create(&self, book: Book) -> Result<Option<Book>, PortError>;

    /// Retrieves every stored book, in no particular order
    async fn read_all(&self) -> Result<Vec<Book>, PortError>;

    /// Retrieves the book with the given ISBN, if any
    async fn read_by_isbn(&self, isbn: &str) -> Result<Option<Book>, PortError>;

    /// Replaces the stored book that has the same ISBN
    ///
    /// # Returns
    ///
    /// The updated book, or `None` if no stored book matched
    async fn update(&self, book: Book) -> Result<Option<Book>, PortError>;

    /// Removes the stored book that has the same ISBN
    ///
    /// # Returns
    ///
    /// `true` if exactly one book was removed
    async fn delete(&self, book: &Book) -> Result<bool, PortError>;

    /// Counts the stored books
    ///
    /// The default loads every book; adapters with a cheaper count override it.
    async fn count(&self) -> Result<u64, PortError> {
        Ok(self.read_all().await?.len() as u64)
    }
}

/// Extension trait for BookPort with convenience methods
#[async_trait]
pub trait BookPortExt: BookPort {
    /// Checks whether a book with the given ISBN is stored
    async fn exists(&self, isbn: &str) -> Result<bool, PortError> {
        Ok(self.read_by_isbn(isbn).await?.is_some())
    }

    /// Gets a book or returns `PortError::NotFound`
    async fn read_required(&self, isbn: &str) -> Result<Book, PortError> {
        self.read_by_isbn(isbn)
            .await?
            .ok_or_else(|| PortError::not_found("Book", isbn))
    }
}

impl<T: BookPort + ?Sized> BookPortExt for T {}

/// Mock implementation of BookPort for testing
///
/// This adapter stores books in memory and is useful for unit testing
/// without a running database.
#[cfg(any(test, feature = "mock"))]
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::RwLock;
    use chrono::Utc;

    /// In-memory mock implementation of BookPort
    #[derive(Debug, Default, Clone)]
    pub struct MockBookPort {
        books: Arc<RwLock<HashMap<String, Book>>>,
    }

    impl MockBookPort {
        /// Creates a new mock port
        pub fn new() -> Self {
            Self::default()
        }

        /// Pre-populates with books for testing
        pub async fn with_books(books: Vec<Book>) -> Self {
            let port = Self::new();
            {
                let mut stored = port.books.write().await;
                for book in books {
                    stored.insert(book.isbn().to_string(), book);
                }
            }
            port
        }
    }

    impl DomainPort for MockBookPort {}

    #[async_trait]
    impl HealthCheckable for MockBookPort {
        async fn health_check(&self) -> core_kernel::HealthCheckResult {
            core_kernel::HealthCheckResult {
                adapter_id: "mock-book-port".to_string(),
                status: core_kernel::AdapterHealth::Healthy,
                latency_ms: 0,
                message: Some("Mock adapter always healthy".to_string()),
                checked_at: Utc::now(),
            }
        }
    }

    #[async_trait]
    impl BookPort for MockBookPort {
        async fn create(&self, book: Book) -> Result<Option<Book>, PortError> {
            book.validate()?;

            let mut books = self.books.write().await;
            if books.contains_key(book.isbn()) {
                return Ok(None);
            }
            books.insert(book.isbn().to_string(), book.clone());
            Ok(Some(book))
        }

        async fn read_all(&self) -> Result<Vec<Book>, PortError> {
            Ok(self.books.read().await.values().cloned().collect())
        }

        async fn read_by_isbn(&self, isbn: &str) -> Result<Option<Book>, PortError> {
            Ok(self.books.read().await.get(isbn).cloned())
        }

        async fn update(&self, book: Book) -> Result<Option<Book>, PortError> {
            book.validate()?;

            let mut books = self.books.write().await;
            match books.get_mut(book.isbn()) {
                Some(stored) => {
                    *stored = book.clone();
                    Ok(Some(book))
                }
                None => Ok(None),
            }
        }

        async fn delete(&self, book: &Book) -> Result<bool, PortError> {
            Ok(self.books.write().await.remove(book.isbn()).is_some())
        }

        async fn count(&self) -> Result<u64, PortError> {
            Ok(self.books.read().await.len() as u64)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::mock::MockBookPort;

    fn refactoring() -> Book {
        Book::new("978-0201485677", "Refactoring", "Martin Fowler")
            .with_publisher("Addison-Wesley")
            .with_edition(1)
    }

    #[tokio::test]
    async fn test_mock_port_create_and_read() {
        let port = MockBookPort::new();

        let created = port.create(refactoring()).await.unwrap();
        assert_eq!(created, Some(refactoring()));

        let retrieved = port.read_by_isbn("978-0201485677").await.unwrap();
        assert_eq!(retrieved, Some(refactoring()));
    }

    #[tokio::test]
    async fn test_mock_port_duplicate_create_keeps_original() {
        let port = MockBookPort::new();
        port.create(refactoring()).await.unwrap();

        let mut impostor = refactoring();
        impostor.title = "Something Else".to_string();

        assert_eq!(port.create(impostor).await.unwrap(), None);

        let stored = port.read_required("978-0201485677").await.unwrap();
        assert_eq!(stored.title, "Refactoring");
    }

    #[tokio::test]
    async fn test_mock_port_update_missing_is_absent() {
        let port = MockBookPort::with_books(vec![refactoring()]).await;

        let ghost = Book::new("000-0000000000", "Ghost", "Nobody");
        assert_eq!(port.update(ghost).await.unwrap(), None);

        assert_eq!(port.read_all().await.unwrap(), vec![refactoring()]);
    }

    #[tokio::test]
    async fn test_mock_port_update_replaces_details() {
        let port = MockBookPort::with_books(vec![refactoring()]).await;

        let mut revised = refactoring();
        revised.edition = Some(2);
        let updated = port.update(revised.clone()).await.unwrap();

        assert_eq!(updated, Some(revised.clone()));
        assert_eq!(port.read_by_isbn(revised.isbn()).await.unwrap(), Some(revised));
    }

    #[tokio::test]
    async fn test_mock_port_delete() {
        let port = MockBookPort::with_books(vec![refactoring()]).await;

        assert!(port.delete(&refactoring()).await.unwrap());
        assert!(!port.delete(&refactoring()).await.unwrap());
        assert!(!port.exists("978-0201485677").await.unwrap());
    }

    #[tokio::test]
    async fn test_mock_port_count_tracks_creates_and_deletes() {
        let port = MockBookPort::new();
        port.create(refactoring()).await.unwrap();
        port.create(Book::new("978-0132350884", "Clean Code", "Robert C. Martin"))
            .await
            .unwrap();
        port.create(refactoring()).await.unwrap();
        port.delete(&refactoring()).await.unwrap();

        assert_eq!(port.count().await.unwrap(), 1);
        assert_eq!(port.read_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_mock_port_rejects_invalid_book() {
        let port = MockBookPort::new();
        let error = port.create(Book::new("", "Title", "Author")).await.unwrap_err();

        assert!(matches!(error, PortError::Validation { .. }));
        assert_eq!(port.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_read_required_not_found() {
        let port = MockBookPort::new();
        let error = port.read_required("missing").await.unwrap_err();
        assert!(error.is_not_found());
    }

    #[tokio::test]
    async fn test_mock_port_health_check() {
        let port = MockBookPort::new();
        let result = port.health_check().await;
        assert_eq!(result.status, core_kernel::AdapterHealth::Healthy);
    }
}

//! MongoDB Book Adapter
//!
//! This module provides the database adapter for the book domain,
//! implementing the `BookPort` trait on top of `BookRepository`.
//!
//! The adapter:
//!
//! - Validates books before they are written
//! - Delegates storage to the repository
//! - Translates `DatabaseError` into `PortError`
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_db::adapters::MongoBookAdapter;
//! use domain_book::BookPort;
//! use std::sync::Arc;
//!
//! let adapter = MongoBookAdapter::new(client, "bookshelf", "books");
//! let port: Arc<dyn BookPort> = Arc::new(adapter);
//! let book = port.read_by_isbn("978-0321125217").await?;
//! ```

use async_trait::async_trait;
use chrono::Utc;
use mongodb::bson::doc;
use mongodb::Client;
use tracing::{debug, instrument, warn};

use core_kernel::{AdapterHealth, DomainPort, HealthCheckResult, HealthCheckable, PortError};
use domain_book::{Book, BookPort};

use crate::client::DatabaseConfig;
use crate::repositories::BookRepository;

/// MongoDB-backed implementation of the BookPort trait
///
/// # Health Checking
///
/// The health check sends a `ping` command to the configured database.
///
/// # Error Handling
///
/// Database errors are translated to `PortError` variants:
/// - `DatabaseError::ConnectionFailed` -> `PortError::Connection`
/// - `DatabaseError::SerializationError` -> `PortError::Transformation`
/// - Other errors -> `PortError::Internal`
#[derive(Debug, Clone)]
pub struct MongoBookAdapter {
    repository: BookRepository,
    client: Client,
    database: String,
}

impl MongoBookAdapter {
    /// Creates a new MongoDB book adapter
    ///
    /// # Arguments
    ///
    /// * `client` - The shared MongoDB client
    /// * `database` - Name of the database
    /// * `collection` - Name of the books collection
    pub fn new(client: Client, database: &str, collection: &str) -> Self {
        Self {
            repository: BookRepository::new(&client, database, collection),
            client,
            database: database.to_string(),
        }
    }

    /// Creates an adapter using the names from a `DatabaseConfig`
    pub fn from_config(client: Client, config: &DatabaseConfig) -> Self {
        Self::new(client, &config.database, &config.collection)
    }
}

impl DomainPort for MongoBookAdapter {}

#[async_trait]
impl HealthCheckable for MongoBookAdapter {
    async fn health_check(&self) -> HealthCheckResult {
        let start = std::time::Instant::now();

        let result = self
            .client
            .database(&self.database)
            .run_command(doc! { "ping": 1 })
            .await;

        let latency_ms = start.elapsed().as_millis() as u64;

        let (status, message) = match result {
            Ok(_) => (AdapterHealth::Healthy, None),
            Err(e) => {
                warn!(error = %e, "MongoDB health check failed");
                (AdapterHealth::Unhealthy, Some(e.to_string()))
            }
        };

        HealthCheckResult {
            adapter_id: format!("mongodb-book-adapter/{}", self.repository.collection_name()),
            status,
            latency_ms,
            message,
            checked_at: Utc::now(),
        }
    }
}

#[async_trait]
impl BookPort for MongoBookAdapter {
    #[instrument(skip(self, book), fields(isbn = %book.isbn()))]
    async fn create(&self, book: Book) -> Result<Option<Book>, PortError> {
        book.validate()?;
        Ok(self.repository.create(&book).await?)
    }

    #[instrument(skip(self))]
    async fn read_all(&self) -> Result<Vec<Book>, PortError> {
        Ok(self.repository.read_all().await?)
    }

    #[instrument(skip(self))]
    async fn read_by_isbn(&self, isbn: &str) -> Result<Option<Book>, PortError> {
        Ok(self.repository.read_by_isbn(isbn).await?)
    }

    #[instrument(skip(self, book), fields(isbn = %book.isbn()))]
    async fn update(&self, book: Book) -> Result<Option<Book>, PortError> {
        book.validate()?;
        Ok(self.repository.update(&book).await?)
    }

    #[instrument(skip(self, book), fields(isbn = %book.isbn()))]
    async fn delete(&self, book: &Book) -> Result<bool, PortError> {
        let deleted = self.repository.delete(book).await?;
        debug!(deleted, "Delete finished");
        Ok(deleted)
    }

    #[instrument(skip(self))]
    async fn count(&self) -> Result<u64, PortError> {
        Ok(self.repository.count().await?)
    }
}

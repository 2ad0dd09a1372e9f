//! Infrastructure Database Layer
//!
//! This crate provides the MongoDB infrastructure for the bookshelf:
//! client configuration, the stored document shape, the book repository,
//! and the adapter that exposes the repository through `BookPort`.
//!
//! # Architecture
//!
//! The crate follows the repository pattern. `BookRepository` talks to the
//! driver and returns `DatabaseError`; `MongoBookAdapter` wraps it, validates
//! input, and speaks the `PortError` vocabulary the rest of the system uses.
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_db::{create_client, DatabaseConfig, MongoBookAdapter};
//!
//! let config = DatabaseConfig::new("mongodb://localhost:27017");
//! let client = create_client(&config).await?;
//! let adapter = MongoBookAdapter::from_config(client, &config);
//! ```

pub mod client;
pub mod error;
pub mod document;
pub mod repositories;
pub mod adapters;

pub use client::{DatabaseClient, DatabaseConfig, create_client, create_client_from_uri};
pub use error::{DatabaseError, DUPLICATE_KEY_CODE, is_duplicate_key};
pub use document::BookDocument;
pub use repositories::BookRepository;
pub use adapters::MongoBookAdapter;

//! Domain Adapters
//!
//! This module provides adapter implementations for domain ports,
//! connecting domain interfaces to the MongoDB database layer.
//!
//! # Usage
//!
//! ```rust,ignore
//! use infra_db::adapters::MongoBookAdapter;
//! use domain_book::BookPort;
//!
//! let adapter = MongoBookAdapter::new(client, "bookshelf", "books");
//! let books = adapter.read_all().await?;
//! ```

pub mod book;

pub use book::MongoBookAdapter;

//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! bookshelf test suite.
//!
//! # Modules
//!
//! - `fixtures`: Well-known books with fixed data
//! - `builders`: Builder for books with generated defaults
//! - `database`: MongoDB test container management
//! - `assertions`: Assertion helpers for book collections
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod database;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use database::*;
pub use assertions::*;
pub use generators::*;

//! Repository implementations for domain entities
//!
//! Repositories encapsulate driver calls and map between stored documents
//! and domain types. Each method is a single round-trip to the server.

pub mod book;

pub use book::BookRepository;

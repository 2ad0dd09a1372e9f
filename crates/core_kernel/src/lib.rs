//! Core Kernel - Foundational types shared by the bookshelf crates
//!
//! This crate provides the building blocks that every other crate relies on:
//! - Port error type and marker traits for the ports-and-adapters layout
//! - Adapter health reporting
//! - Common error type

pub mod ports;
pub mod error;

pub use ports::{
    PortError, DomainPort, HealthCheckable, HealthCheckResult, AdapterHealth,
};
pub use error::CoreError;

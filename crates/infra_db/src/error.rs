//! Database error types
//!
//! This module defines the error types that can occur during database operations,
//! providing meaningful error messages and proper error chaining.

use mongodb::error::{Error as MongoError, ErrorKind, WriteFailure};
use thiserror::Error;

use core_kernel::PortError;

/// Server error code MongoDB reports for a unique index violation
pub const DUPLICATE_KEY_CODE: i32 = 11000;

/// Errors that can occur during database operations
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// Failed to establish a database connection
    #[error("Failed to connect to database: {0}")]
    ConnectionFailed(String),

    /// Query execution failed
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Invalid client configuration or command argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// BSON serialization/deserialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl DatabaseError {
    /// Checks if this error is a connection-related issue
    pub fn is_connection_error(&self) -> bool {
        matches!(self, DatabaseError::ConnectionFailed(_))
    }
}

/// Returns true if the driver error is a duplicate key write error
pub fn is_duplicate_key(error: &MongoError) -> bool {
    match error.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_error)) => {
            write_error.code == DUPLICATE_KEY_CODE
        }
        _ => false,
    }
}

/// Maps driver errors to the DatabaseError variant that describes them
impl From<&MongoError> for DatabaseError {
    fn from(error: &MongoError) -> Self {
        match error.kind.as_ref() {
            ErrorKind::Authentication { .. }
            | ErrorKind::ServerSelection { .. }
            | ErrorKind::ConnectionPoolCleared { .. }
            | ErrorKind::DnsResolve { .. }
            | ErrorKind::Io(_) => DatabaseError::ConnectionFailed(error.to_string()),
            ErrorKind::InvalidArgument { .. } => DatabaseError::InvalidArgument(error.to_string()),
            ErrorKind::BsonDeserialization(_) | ErrorKind::BsonSerialization(_) => {
                DatabaseError::SerializationError(error.to_string())
            }
            _ => DatabaseError::QueryFailed(error.to_string()),
        }
    }
}

impl From<MongoError> for DatabaseError {
    fn from(error: MongoError) -> Self {
        DatabaseError::from(&error)
    }
}

/// Translates database errors into the port error vocabulary
impl From<DatabaseError> for PortError {
    fn from(error: DatabaseError) -> Self {
        match error {
            DatabaseError::ConnectionFailed(message) => PortError::Connection {
                message,
                source: None,
            },
            DatabaseError::SerializationError(message) => PortError::Transformation { message },
            other => PortError::Internal {
                message: other.to_string(),
                source: Some(Box::new(other)),
            },
        }
    }
}

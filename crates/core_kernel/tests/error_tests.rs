//! Tests for core_kernel error types

use core_kernel::error::CoreError;
use core_kernel::PortError;

#[test]
fn test_core_error_validation() {
    let error = CoreError::validation("Invalid input");

    match error {
        CoreError::Validation(msg) => assert_eq!(msg, "Invalid input"),
        _ => panic!("Expected Validation error"),
    }
}

#[test]
fn test_core_error_not_found() {
    let error = CoreError::not_found("Book not found");

    match error {
        CoreError::NotFound(msg) => assert_eq!(msg, "Book not found"),
        _ => panic!("Expected NotFound error"),
    }
}

#[test]
fn test_core_error_configuration_display() {
    let error = CoreError::configuration("collection name must not be empty");
    assert_eq!(
        error.to_string(),
        "Configuration error: collection name must not be empty"
    );
}

#[test]
fn test_port_error_connection_has_no_source_by_default() {
    use std::error::Error;

    let error = PortError::connection("no servers available");
    assert!(error.source().is_none());
    assert!(error.to_string().contains("no servers available"));
}

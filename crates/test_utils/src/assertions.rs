//! Custom Test Assertions
//!
//! Provides assertion helpers for books that give more meaningful failure
//! messages than comparing whole vectors.

use domain_book::Book;

/// Asserts that two books carry the same key and details
///
/// # Panics
///
/// Panics naming the first field that differs
pub fn assert_same_book(actual: &Book, expected: &Book) {
    assert_eq!(actual.isbn(), expected.isbn(), "isbn mismatch");
    assert_eq!(actual.title, expected.title, "title mismatch for isbn {}", expected.isbn());
    assert_eq!(actual.author, expected.author, "author mismatch for isbn {}", expected.isbn());
    assert_eq!(actual, expected, "detail mismatch for isbn {}", expected.isbn());
}

/// Asserts that a collection holds exactly the given ISBNs, ignoring order
pub fn assert_isbns_eq(books: &[Book], expected: &[&str]) {
    let mut actual: Vec<&str> = books.iter().map(Book::isbn).collect();
    let mut expected = expected.to_vec();
    actual.sort_unstable();
    expected.sort_unstable();
    assert_eq!(actual, expected, "stored ISBNs differ from expected");
}

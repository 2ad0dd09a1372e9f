//! Book model property tests

use domain_book::{Book, BookError, MAX_ISBN_LENGTH};
use proptest::prelude::*;

fn isbn_strategy() -> impl Strategy<Value = String> {
    "[0-9X-]{1,32}"
}

fn text_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z ,.'-]{0,60}"
}

proptest! {
    #[test]
    fn well_formed_books_validate(
        isbn in isbn_strategy(),
        title in text_strategy(),
        author in text_strategy(),
        edition in 1i32..50,
    ) {
        let book = Book::new(isbn, title, author).with_edition(edition);
        prop_assert!(book.validate().is_ok());
    }

    #[test]
    fn isbn_longer_than_limit_is_rejected(extra in 1usize..20) {
        let book = Book::new("1".repeat(MAX_ISBN_LENGTH + extra), "Title", "Author");
        prop_assert!(matches!(book.validate(), Err(BookError::InvalidIsbn(_))));
    }

    #[test]
    fn json_keeps_every_field(
        isbn in isbn_strategy(),
        title in text_strategy(),
        year in 1450i32..2100,
    ) {
        let book = Book::new(isbn, title, "Author")
            .with_language("en")
            .with_published_year(year);

        let json = serde_json::to_string(&book).unwrap();
        let parsed: Book = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(parsed, book);
    }
}

#[test]
fn missing_optional_fields_deserialize_as_none() {
    let book: Book = serde_json::from_str(
        r#"{"isbn":"978-1593278281","title":"The Rust Programming Language","author":"Steve Klabnik"}"#,
    )
    .unwrap();

    assert_eq!(book.isbn(), "978-1593278281");
    assert!(book.publisher.is_none());
    assert!(book.edition.is_none());
}

#[test]
fn validation_error_maps_to_port_validation_with_field() {
    let error: core_kernel::PortError = BookError::MissingField("author").into();

    match error {
        core_kernel::PortError::Validation { field, message } => {
            assert_eq!(field.as_deref(), Some("author"));
            assert!(message.contains("author"));
        }
        other => panic!("Expected Validation error, got {other:?}"),
    }
}

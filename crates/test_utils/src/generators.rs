//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating books that satisfy
//! `Book::validate`.

use domain_book::Book;
use proptest::prelude::*;

/// Strategy for generating ISBN-13 shaped keys
pub fn isbn_strategy() -> impl Strategy<Value = String> {
    (prop_oneof![Just("978"), Just("979")], 0u64..10_000_000_000u64)
        .prop_map(|(prefix, digits)| format!("{}-{:010}", prefix, digits))
}

/// Strategy for generating non-blank titles and author names
pub fn text_strategy() -> impl Strategy<Value = String> {
    "[A-Z][a-z]{1,12}( [A-Z][a-z]{1,12}){0,4}"
}

/// Strategy for generating valid books with random optional details
pub fn book_strategy() -> impl Strategy<Value = Book> {
    (
        isbn_strategy(),
        text_strategy(),
        text_strategy(),
        proptest::option::of(text_strategy()),
        proptest::option::of(1i32..20),
        proptest::option::of(1450i32..2100),
    )
        .prop_map(|(isbn, title, author, publisher, edition, year)| {
            let mut book = Book::new(isbn, title, author);
            book.publisher = publisher;
            book.edition = edition;
            book.published_year = year;
            book
        })
}

/// Strategy for generating a small catalogue with distinct ISBNs
pub fn catalogue_strategy(max_len: usize) -> impl Strategy<Value = Vec<Book>> {
    proptest::collection::vec(book_strategy(), 0..=max_len).prop_map(|books| {
        let mut seen = std::collections::HashSet::new();
        books
            .into_iter()
            .filter(|book| seen.insert(book.isbn().to_string()))
            .collect()
    })
}

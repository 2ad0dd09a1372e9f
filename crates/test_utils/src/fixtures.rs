//! Pre-built Test Fixtures
//!
//! Provides well-known books with fixed data. These fixtures are consistent
//! and predictable, which keeps assertions in tests readable.

use domain_book::Book;

/// Fixture for book test data
pub struct BookFixtures;

impl BookFixtures {
    /// A fully populated book
    pub fn clean_code() -> Book {
        Book::new("978-0132350884", "Clean Code", "Robert C. Martin")
            .with_publisher("Prentice Hall")
            .with_language("English")
            .with_edition(1)
            .with_published_year(2008)
    }

    /// A book with only the mandatory fields
    pub fn refactoring() -> Book {
        Book::new("978-0201485677", "Refactoring", "Martin Fowler")
    }

    pub fn domain_driven_design() -> Book {
        Book::new("978-0321125217", "Domain-Driven Design", "Eric Evans")
            .with_publisher("Addison-Wesley")
            .with_published_year(2003)
    }

    /// A book that fails validation because its ISBN is blank
    pub fn invalid() -> Book {
        Book::new("", "Untitled", "Unknown")
    }

    /// Three distinct valid books
    pub fn catalogue() -> Vec<Book> {
        vec![
            Self::clean_code(),
            Self::refactoring(),
            Self::domain_driven_design(),
        ]
    }
}

//! Book repository implementation
//!
//! This module provides MongoDB access for the books collection. Each method
//! issues exactly one driver operation and logs its outcome.

use futures::TryStreamExt;
use mongodb::bson::doc;
use mongodb::{Client, Collection};
use tracing::info;

use domain_book::Book;

use crate::client::DatabaseConfig;
use crate::document::BookDocument;
use crate::error::{is_duplicate_key, DatabaseError};

/// Repository for managing the books collection
///
/// Holds a collection handle obtained once at construction. The underlying
/// client is shared and outlives the repository.
#[derive(Debug, Clone)]
pub struct BookRepository {
    collection: Collection<BookDocument>,
}

impl BookRepository {
    /// Creates a new BookRepository bound to the given database and collection
    ///
    /// # Arguments
    ///
    /// * `client` - The shared MongoDB client
    /// * `database` - Name of the database
    /// * `collection` - Name of the books collection
    pub fn new(client: &Client, database: &str, collection: &str) -> Self {
        Self {
            collection: client.database(database).collection(collection),
        }
    }

    /// Creates a repository using the names from a `DatabaseConfig`
    pub fn from_config(client: &Client, config: &DatabaseConfig) -> Self {
        Self::new(client, &config.database, &config.collection)
    }

    /// Returns the name of the underlying collection
    pub fn collection_name(&self) -> &str {
        self.collection.name()
    }

    /// Inserts a new book keyed by its ISBN
    ///
    /// # Returns
    ///
    /// The created book, or `None` if a book with the same ISBN already exists
    ///
    /// # Errors
    ///
    /// Any driver error other than a duplicate key violation
    pub async fn create(&self, book: &Book) -> Result<Option<Book>, DatabaseError> {
        match self.collection.insert_one(BookDocument::from(book)).await {
            Ok(_) => {
                info!("Added new book {}", book);
                Ok(Some(book.clone()))
            }
            Err(error) if is_duplicate_key(&error) => {
                info!("Book with isbn[{}] already exists", book.isbn());
                Ok(None)
            }
            Err(error) => Err(error.into()),
        }
    }

    /// Retrieves all books in the collection, in natural order
    pub async fn read_all(&self) -> Result<Vec<Book>, DatabaseError> {
        let books: Vec<Book> = self
            .collection
            .find(doc! {})
            .await?
            .map_ok(Book::from)
            .try_collect()
            .await?;

        info!("Retrieved [{}] books", books.len());
        Ok(books)
    }

    /// Retrieves the book with the given ISBN
    pub async fn read_by_isbn(&self, isbn: &str) -> Result<Option<Book>, DatabaseError> {
        let document = self.collection.find_one(doc! { "_id": isbn }).await?;

        match document {
            Some(document) => {
                let book = Book::from(document);
                info!("Retrieved book for isbn[{}]: {}", isbn, book);
                Ok(Some(book))
            }
            None => {
                info!("Book with isbn[{}] does not exist", isbn);
                Ok(None)
            }
        }
    }

    /// Replaces the stored document that has the same ISBN
    ///
    /// # Returns
    ///
    /// The updated book if exactly one document matched, otherwise `None`
    pub async fn update(&self, book: &Book) -> Result<Option<Book>, DatabaseError> {
        let result = self
            .collection
            .replace_one(doc! { "_id": book.isbn() }, BookDocument::from(book))
            .await?;

        if result.matched_count == 1 {
            info!("Updated book with isbn[{}]", book.isbn());
            Ok(Some(book.clone()))
        } else {
            info!("Book with isbn[{}] does not exist", book.isbn());
            Ok(None)
        }
    }

    /// Removes the stored document that has the same ISBN
    ///
    /// # Returns
    ///
    /// `true` if exactly one document was removed
    pub async fn delete(&self, book: &Book) -> Result<bool, DatabaseError> {
        let result = self
            .collection
            .delete_one(doc! { "_id": book.isbn() })
            .await?;

        if result.deleted_count == 1 {
            info!("Deleted book with isbn[{}]", book.isbn());
            Ok(true)
        } else {
            info!("Book with isbn[{}] does not exist", book.isbn());
            Ok(false)
        }
    }

    /// Counts the documents in the collection
    pub async fn count(&self) -> Result<u64, DatabaseError> {
        Ok(self.collection.count_documents(doc! {}).await?)
    }
}

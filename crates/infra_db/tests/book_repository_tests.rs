//! Book repository integration tests
//!
//! These run against a throwaway MongoDB container and need a Docker daemon:
//!
//! ```bash
//! cargo test -p infra_db -- --ignored
//! ```

use core_kernel::{AdapterHealth, HealthCheckable};
use domain_book::{BookPort, BookPortExt};
use infra_db::{BookRepository, MongoBookAdapter};
use test_utils::{
    assert_isbns_eq, assert_same_book, create_isolated_test_database, BookFixtures,
    TestBookBuilder, TestDatabase,
};

fn repository(db: &TestDatabase) -> BookRepository {
    BookRepository::new(db.client(), db.database_name(), &db.fresh_collection_name())
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn create_then_read_returns_same_data() {
    let db = create_isolated_test_database().await.expect("mongo container");
    let repo = repository(&db);
    let book = BookFixtures::clean_code();

    let created = repo.create(&book).await.unwrap();
    assert_eq!(created.as_ref(), Some(&book));

    let read = repo.read_by_isbn(book.isbn()).await.unwrap().expect("stored book");
    assert_same_book(&read, &book);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn duplicate_create_is_absent_and_keeps_original() {
    let db = create_isolated_test_database().await.expect("mongo container");
    let repo = repository(&db);
    let original = BookFixtures::domain_driven_design();
    repo.create(&original).await.unwrap();

    let impostor = TestBookBuilder::new()
        .with_isbn(original.isbn())
        .with_title("Not The Blue Book")
        .build();

    assert_eq!(repo.create(&impostor).await.unwrap(), None);

    let stored = repo.read_by_isbn(original.isbn()).await.unwrap().unwrap();
    assert_same_book(&stored, &original);
    assert_eq!(repo.count().await.unwrap(), 1);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn update_of_missing_key_is_absent_and_changes_nothing() {
    let db = create_isolated_test_database().await.expect("mongo container");
    let repo = repository(&db);
    repo.create(&BookFixtures::refactoring()).await.unwrap();

    let ghost = TestBookBuilder::new().build();
    assert_eq!(repo.update(&ghost).await.unwrap(), None);

    let books = repo.read_all().await.unwrap();
    assert_eq!(books, vec![BookFixtures::refactoring()]);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn update_replaces_the_document() {
    let db = create_isolated_test_database().await.expect("mongo container");
    let repo = repository(&db);
    let mut book = BookFixtures::refactoring();
    repo.create(&book).await.unwrap();

    book.edition = Some(2);
    book.published_year = Some(2018);
    assert_eq!(repo.update(&book).await.unwrap().as_ref(), Some(&book));

    let stored = repo.read_by_isbn(book.isbn()).await.unwrap().unwrap();
    assert_same_book(&stored, &book);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn delete_reports_whether_a_document_was_removed() {
    let db = create_isolated_test_database().await.expect("mongo container");
    let repo = repository(&db);
    let book = BookFixtures::clean_code();
    repo.create(&book).await.unwrap();

    assert!(repo.delete(&book).await.unwrap());
    assert!(!repo.delete(&book).await.unwrap());
    assert!(repo.read_by_isbn(book.isbn()).await.unwrap().is_none());
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn read_all_counts_created_minus_deleted() {
    let db = create_isolated_test_database().await.expect("mongo container");
    let repo = repository(&db);
    let books = TestBookBuilder::build_many(5);

    for book in &books {
        repo.create(book).await.unwrap();
    }
    repo.create(&books[0]).await.unwrap();
    repo.delete(&books[1]).await.unwrap();
    repo.delete(&books[3]).await.unwrap();

    let stored = repo.read_all().await.unwrap();
    assert_isbns_eq(
        &stored,
        &[books[0].isbn(), books[2].isbn(), books[4].isbn()],
    );
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn adapter_validates_and_reports_health() {
    let db = create_isolated_test_database().await.expect("mongo container");
    let adapter = MongoBookAdapter::new(
        db.client().clone(),
        db.database_name(),
        &db.fresh_collection_name(),
    );

    let error = adapter.create(BookFixtures::invalid()).await.unwrap_err();
    assert!(matches!(error, core_kernel::PortError::Validation { .. }));

    adapter.create(BookFixtures::clean_code()).await.unwrap();
    assert!(adapter.exists(BookFixtures::clean_code().isbn()).await.unwrap());
    assert_eq!(adapter.count().await.unwrap(), 1);

    let health = adapter.health_check().await;
    assert_eq!(health.status, AdapterHealth::Healthy);
}

//! Database Test Utilities
//!
//! Provides helpers for database testing including testcontainer management
//! for MongoDB integration tests. Starting a container requires a reachable
//! Docker daemon.

use mongodb::bson::doc;
use mongodb::Client;
use testcontainers::{runners::AsyncRunner, ContainerAsync};
use testcontainers_modules::mongo::Mongo;
use uuid::Uuid;

const MONGO_PORT: u16 = 27017;
const TEST_DATABASE: &str = "bookshelf_test";

/// Configuration for test database
#[derive(Debug, Clone)]
pub struct TestDatabaseConfig {
    pub host: String,
    pub port: u16,
    pub database: String,
}

impl Default for TestDatabaseConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: MONGO_PORT,
            database: TEST_DATABASE.to_string(),
        }
    }
}

impl TestDatabaseConfig {
    /// Creates the database connection URI
    pub fn connection_uri(&self) -> String {
        format!("mongodb://{}:{}", self.host, self.port)
    }
}

/// A wrapper around a MongoDB test container
pub struct TestDatabase {
    _container: ContainerAsync<Mongo>,
    pub config: TestDatabaseConfig,
    pub client: Client,
}

impl TestDatabase {
    /// Starts a new MongoDB container for testing
    ///
    /// # Errors
    ///
    /// Returns an error if the container fails to start or does not answer a ping
    pub async fn new() -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let container = Mongo::default().start().await?;

        let port = container.get_host_port_ipv4(MONGO_PORT).await?;
        let host = container.get_host().await?.to_string();

        let config = TestDatabaseConfig {
            host,
            port,
            database: TEST_DATABASE.to_string(),
        };

        let client = Client::with_uri_str(config.connection_uri()).await?;
        client
            .database(&config.database)
            .run_command(doc! { "ping": 1 })
            .await?;

        Ok(Self {
            _container: container,
            config,
            client,
        })
    }

    /// Returns a reference to the client
    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Returns the name of the test database
    pub fn database_name(&self) -> &str {
        &self.config.database
    }

    /// Returns a collection name no other test has used
    pub fn fresh_collection_name(&self) -> String {
        format!("books_{}", Uuid::new_v4().simple())
    }

    /// Drops a collection, discarding its documents
    pub async fn drop_collection(
        &self,
        name: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.client
            .database(&self.config.database)
            .collection::<mongodb::bson::Document>(name)
            .drop()
            .await?;
        Ok(())
    }
}

/// Creates an isolated test database for a single test
pub async fn create_isolated_test_database(
) -> Result<TestDatabase, Box<dyn std::error::Error + Send + Sync>> {
    TestDatabase::new().await
}

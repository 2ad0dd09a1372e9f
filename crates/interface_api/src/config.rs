//! API configuration

use config::{Config, ConfigError, Environment};
use serde::Deserialize;

use core_kernel::CoreError;
use infra_db::DatabaseConfig;

/// API configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// MongoDB connection string
    pub mongodb_uri: String,
    /// Database holding the books collection
    pub database_name: String,
    /// Books collection name
    pub collection_name: String,
    /// Log level
    pub log_level: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            mongodb_uri: "mongodb://localhost:27017".to_string(),
            database_name: "bookshelf".to_string(),
            collection_name: "books".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl ApiConfig {
    /// Loads configuration from `API_*` environment variables over the defaults
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::load(Environment::with_prefix("API"))
    }

    fn load(environment: Environment) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        Config::builder()
            .set_default("host", defaults.host)?
            .set_default("port", i64::from(defaults.port))?
            .set_default("mongodb_uri", defaults.mongodb_uri)?
            .set_default("database_name", defaults.database_name)?
            .set_default("collection_name", defaults.collection_name)?
            .set_default("log_level", defaults.log_level)?
            .add_source(environment)
            .build()?
            .try_deserialize()
    }

    /// Rejects settings the server cannot start with
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.database_name.trim().is_empty() {
            return Err(CoreError::configuration("database name must not be empty"));
        }
        if self.collection_name.trim().is_empty() {
            return Err(CoreError::configuration("collection name must not be empty"));
        }
        Ok(())
    }

    /// Returns the server address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Builds the database client configuration
    pub fn database_config(&self) -> DatabaseConfig {
        DatabaseConfig::new(&self.mongodb_uri)
            .database(&self.database_name)
            .collection(&self.collection_name)
            .app_name(concat!("bookshelf-api/", env!("CARGO_PKG_VERSION")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn load_with(vars: &[(&str, &str)]) -> ApiConfig {
        let mut source = config::Map::new();
        for (key, value) in vars {
            source.insert(key.to_string(), value.to_string());
        }
        ApiConfig::load(Environment::with_prefix("API").source(Some(source))).unwrap()
    }

    #[test]
    fn test_defaults_when_environment_is_empty() {
        let config = load_with(&[]);
        assert_eq!(config.port, 8080);
        assert_eq!(config.database_name, "bookshelf");
        assert_eq!(config.collection_name, "books");
    }

    #[test]
    fn test_environment_overrides_defaults() {
        let config = load_with(&[
            ("API_PORT", "9090"),
            ("API_MONGODB_URI", "mongodb://db:27017"),
            ("API_COLLECTION_NAME", "catalogue"),
        ]);

        assert_eq!(config.port, 9090);
        assert_eq!(config.mongodb_uri, "mongodb://db:27017");
        assert_eq!(config.collection_name, "catalogue");
        assert_eq!(config.host, "0.0.0.0");
    }

    #[test]
    fn test_validate_rejects_blank_collection() {
        let config = ApiConfig {
            collection_name: " ".to_string(),
            ..ApiConfig::default()
        };
        assert!(matches!(config.validate(), Err(CoreError::Configuration(_))));
    }

    #[test]
    fn test_database_config_carries_names() {
        let config = ApiConfig::default();
        let db = config.database_config();

        assert_eq!(db.uri, config.mongodb_uri);
        assert_eq!(db.collection, "books");
        assert!(db.app_name.unwrap().starts_with("bookshelf-api/"));
    }

    #[test]
    fn test_server_addr() {
        assert_eq!(ApiConfig::default().server_addr(), "0.0.0.0:8080");
    }
}

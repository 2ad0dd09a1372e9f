//! Bookshelf - API Server Binary
//!
//! This binary starts the HTTP API server for the book catalogue.
//!
//! # Usage
//!
//! ```bash
//! # Run with default configuration
//! cargo run --bin bookshelf-api
//!
//! # Run with environment variables
//! API_PORT=9090 API_MONGODB_URI=mongodb://db:27017 cargo run --bin bookshelf-api
//! ```
//!
//! # Environment Variables
//!
//! * `API_HOST` - Server host (default: 0.0.0.0)
//! * `API_PORT` - Server port (default: 8080)
//! * `API_MONGODB_URI` - MongoDB connection string (default: mongodb://localhost:27017)
//! * `API_DATABASE_NAME` - Database name (default: bookshelf)
//! * `API_COLLECTION_NAME` - Books collection name (default: books)
//! * `API_LOG_LEVEL` - Log level: trace, debug, info, warn, error (default: info)

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use core_kernel::HealthCheckable;
use infra_db::{create_client, MongoBookAdapter};
use interface_api::{config::ApiConfig, create_router};
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Main entry point for the API server.
///
/// Initializes logging, loads configuration, creates the database client,
/// and starts the HTTP server.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    let config = ApiConfig::from_env().context("failed to load configuration")?;
    config.validate()?;

    init_tracing(&config.log_level);

    tracing::info!(
        host = %config.host,
        port = %config.port,
        database = %config.database_name,
        collection = %config.collection_name,
        "Starting Bookshelf API Server"
    );

    let db_config = config.database_config();
    let client = create_client(&db_config)
        .await
        .context("failed to create MongoDB client")?;
    let adapter = MongoBookAdapter::from_config(client, &db_config);

    // The driver connects lazily; report reachability up front
    let health = adapter.health_check().await;
    if health.is_operational() {
        tracing::info!(latency_ms = health.latency_ms, "Database ready");
    } else {
        tracing::warn!(message = ?health.message, "Database not reachable yet");
    }

    let app = create_router(Arc::new(adapter));

    let addr: SocketAddr = config
        .server_addr()
        .parse()
        .with_context(|| format!("invalid server address {}", config.server_addr()))?;

    tracing::info!(%addr, "Server listening");

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// `RUST_LOG` wins over the configured level when set.
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}

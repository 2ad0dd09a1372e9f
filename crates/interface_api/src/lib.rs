//! HTTP API Layer
//!
//! This crate provides the REST API for the bookshelf using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: Request handlers for books and health checks
//! - **Middleware**: Request id propagation, tracing, request logging
//! - **DTOs**: Request bodies with validation
//! - **Error Handling**: Consistent JSON error responses
//!
//! Handlers only see `Arc<dyn BookPort>`, so the router runs unchanged on
//! top of MongoDB or an in-memory port.
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::create_router;
//!
//! let app = create_router(Arc::new(adapter));
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod error;
pub mod middleware;
pub mod handlers;
pub mod dto;

use std::sync::Arc;

use axum::{
    Router,
    routing::get,
    middleware as axum_middleware,
};
use tower::ServiceBuilder;
use tower_http::cors::{CorsLayer, Any};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use domain_book::BookPort;

use crate::middleware::request_logging_middleware;
use crate::handlers::{books, health};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub books: Arc<dyn BookPort>,
}

/// Creates the main API router
///
/// # Arguments
///
/// * `books` - Storage port for the book catalogue
///
/// # Returns
///
/// Configured Axum router with all routes and middleware
pub fn create_router(books: Arc<dyn BookPort>) -> Router {
    let state = AppState { books };

    // Public routes
    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check));

    // Book routes
    let book_routes = Router::new()
        .route("/", get(books::list_books).post(books::create_book))
        .route(
            "/:isbn",
            get(books::get_book)
                .put(books::update_book)
                .delete(books::delete_book),
        );

    let api_routes = Router::new()
        .nest("/books", book_routes)
        .layer(axum_middleware::from_fn(request_logging_middleware));

    // Combine all routes
    Router::new()
        .merge(public_routes)
        .nest("/api/v1", api_routes)
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(TraceLayer::new_for_http())
                .layer(PropagateRequestIdLayer::x_request_id()),
        )
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

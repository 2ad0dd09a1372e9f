//! Book handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::debug;
use validator::Validate;

use domain_book::Book;

use crate::dto::book::{CreateBookRequest, UpdateBookRequest};
use crate::{error::ApiError, AppState};

fn not_found(isbn: &str) -> ApiError {
    ApiError::NotFound(format!("Book with isbn '{}' does not exist", isbn))
}

/// Lists all books
pub async fn list_books(State(state): State<AppState>) -> Result<Json<Vec<Book>>, ApiError> {
    let books = state.books.read_all().await?;
    Ok(Json(books))
}

/// Creates a new book
pub async fn create_book(
    State(state): State<AppState>,
    Json(request): Json<CreateBookRequest>,
) -> Result<(StatusCode, Json<Book>), ApiError> {
    request.validate()?;
    let book = request.into_book();
    let isbn = book.isbn().to_string();

    match state.books.create(book).await? {
        Some(created) => Ok((StatusCode::CREATED, Json(created))),
        None => Err(ApiError::Conflict(format!(
            "Book with isbn '{}' already exists",
            isbn
        ))),
    }
}

/// Gets a book by ISBN
pub async fn get_book(
    State(state): State<AppState>,
    Path(isbn): Path<String>,
) -> Result<Json<Book>, ApiError> {
    state
        .books
        .read_by_isbn(&isbn)
        .await?
        .map(Json)
        .ok_or_else(|| not_found(&isbn))
}

/// Replaces the details of an existing book
pub async fn update_book(
    State(state): State<AppState>,
    Path(isbn): Path<String>,
    Json(request): Json<UpdateBookRequest>,
) -> Result<Json<Book>, ApiError> {
    request.validate()?;

    state
        .books
        .update(request.into_book(&isbn))
        .await?
        .map(Json)
        .ok_or_else(|| not_found(&isbn))
}

/// Deletes a book by ISBN
pub async fn delete_book(
    State(state): State<AppState>,
    Path(isbn): Path<String>,
) -> Result<StatusCode, ApiError> {
    let book = state
        .books
        .read_by_isbn(&isbn)
        .await?
        .ok_or_else(|| not_found(&isbn))?;

    if state.books.delete(&book).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        // Removed by another request between the read and the delete
        debug!(%isbn, "Book vanished before delete");
        Err(not_found(&isbn))
    }
}

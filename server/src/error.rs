//! Unified error handling for the server.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use bookshelf_engine::Error as EngineError;
use serde::Serialize;

/// Message returned for every missing book.
pub const BOOK_NOT_FOUND: &str = "Book Not Found";

/// Application error type.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Engine error: {0}")]
    Engine(#[from] EngineError),

    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Error response body.
#[derive(Serialize)]
struct ErrorResponse {
    detail: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, detail) = match &self {
            AppError::Engine(EngineError::BookNotFound(id)) => {
                tracing::warn!("Book {} not found", id);
                (StatusCode::NOT_FOUND, BOOK_NOT_FOUND.to_string())
            }
            AppError::Engine(e) => {
                tracing::warn!("Rejected query: {}", e);
                (StatusCode::UNPROCESSABLE_ENTITY, e.to_string())
            }
            AppError::Validation(msg) => {
                tracing::warn!("Validation failed: {}", msg);
                (StatusCode::UNPROCESSABLE_ENTITY, msg.clone())
            }
        };

        (status, Json(ErrorResponse { detail })).into_response()
    }
}

/// Result type alias for handlers.
pub type Result<T> = std::result::Result<T, AppError>;

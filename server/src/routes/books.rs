//! Book endpoint routes.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use bookshelf_engine::{BookCandidate, BookId, BookView};

use crate::error::Result;
use crate::handlers::{
    handle_create, handle_delete, handle_get, handle_list, handle_update, ListBooksQuery,
    ListBooksResponse,
};
use crate::AppState;

/// Create book routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/books", get(list_handler).post(create_handler))
        .route(
            "/api/books/{id}",
            get(get_handler).put(update_handler).delete(delete_handler),
        )
}

/// GET /api/books - List books with filters, sort and pagination.
async fn list_handler(
    State(state): State<AppState>,
    Query(query): Query<ListBooksQuery>,
) -> Result<Json<ListBooksResponse>> {
    let store = state.store.read().await;
    let response = handle_list(&store, query)?;
    Ok(Json(response))
}

/// GET /api/books/{id} - Fetch one book.
async fn get_handler(
    State(state): State<AppState>,
    Path(id): Path<BookId>,
) -> Result<Json<BookView>> {
    let store = state.store.read().await;
    let book = handle_get(&store, id)?;
    Ok(Json(book))
}

/// POST /api/books - Create a book.
async fn create_handler(
    State(state): State<AppState>,
    Json(candidate): Json<BookCandidate>,
) -> Result<(StatusCode, Json<BookView>)> {
    let today = chrono::Local::now().date_naive();
    let mut store = state.store.write().await;
    let book = handle_create(&mut store, candidate, today)?;
    Ok((StatusCode::CREATED, Json(book)))
}

/// PUT /api/books/{id} - Replace a book.
async fn update_handler(
    State(state): State<AppState>,
    Path(id): Path<BookId>,
    Json(candidate): Json<BookCandidate>,
) -> Result<Json<BookView>> {
    let mut store = state.store.write().await;
    let book = handle_update(&mut store, id, candidate)?;
    Ok(Json(book))
}

/// DELETE /api/books/{id} - Delete a book.
async fn delete_handler(
    State(state): State<AppState>,
    Path(id): Path<BookId>,
) -> Result<Json<BookView>> {
    let mut store = state.store.write().await;
    let book = handle_delete(&mut store, id)?;
    Ok(Json(book))
}

//! Service status endpoints: health, greeting and banner.

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::AppState;

/// Health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    /// Books currently held by the store
    pub books: usize,
}

#[derive(Serialize)]
pub struct HelloResponse {
    pub message: &'static str,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/hello", get(hello))
        .route("/", get(root))
}

/// GET /health - Report liveness and the store size.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let books = state.store.read().await.len();
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        books,
    })
}

/// GET /api/hello
async fn hello() -> Json<HelloResponse> {
    Json(HelloResponse {
        message: "Hello World",
    })
}

async fn root() -> &'static str {
    "Bookshelf API"
}

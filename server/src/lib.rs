//! Bookshelf Server - REST API over the in-memory book store.
//!
//! Exposes list, get, create, update and delete for books under `/api/books`.
//! The router is built by [`app`] so tests can drive it without a socket.

pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;

use axum::Router;
use bookshelf_engine::BookStore;
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// The book store shared by every request. Writers hold the lock for the
/// whole mutation.
pub type SharedStore = Arc<RwLock<BookStore>>;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: SharedStore,
}

impl AppState {
    pub fn new(store: BookStore) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }
}

/// Build the application router with tracing and CORS layers.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(routes::create_routes())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

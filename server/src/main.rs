//! Bookshelf Server binary.

use bookshelf_engine::BookStore;
use bookshelf_server::{app, config::Config, AppState};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bookshelf_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env()?;

    tracing::info!("Starting Bookshelf Server on {}:{}", config.host, config.port);

    let store = if config.seed_books {
        BookStore::seeded()
    } else {
        BookStore::new()
    };
    tracing::info!("Book store initialized with {} books", store.len());

    let addr = config.bind_addr();
    let app = app(AppState::new(store));

    // Start server
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

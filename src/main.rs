//! Posts Backend
//!
//! Serves posts from a SQLite table as JSON and as server-rendered pages.

mod api;
mod config;
mod db;
mod errors;
mod models;
mod views;

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use config::Config;
use db::PostStore;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<PostStore>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Posts Backend");
    tracing::info!("Database URL: {:?}", config.db_url);
    tracing::info!("Bind address: {}", config.bind_addr);

    if config.db_url.is_empty() {
        tracing::warn!("No database endpoint configured (DB_URL). Post lookups will fail!");
    }

    if config.init_schema {
        db::init_schema(&config.db_url).await?;
    }

    let state = AppState {
        store: Arc::new(PostStore::new(config.db_url.clone())),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/posts", get(api::list_posts))
        .route("/posts/{id}", get(api::get_post));

    let page_routes = Router::new()
        .route("/", get(api::index_page))
        .route("/posts", get(api::posts_page));

    // Health check
    let health_routes = Router::new().route("/health", get(health_check));

    Router::new()
        .nest("/api", api_routes)
        .merge(page_routes)
        .merge(health_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}

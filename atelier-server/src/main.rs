//! atelier-server — storefront and back-office content API
//!
//! Long-running service that:
//! - Serves catalog, hero slide, page content, and site setting CRUD
//! - Serves the build-your-own configurator (SKU → part → option tree,
//!   pricing/composition previews, quote snapshots)
//! - Relays admin image uploads to the media hosting service

mod api;
mod config;
mod configurator;
mod db;
mod media;
mod state;

use config::Config;
use state::AppState;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    // Load .env file
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "atelier_server=info,tower_http=info".into()),
        )
        .init();

    let config = Config::from_env()?;

    tracing::info!("Starting atelier-server (env: {})", config.environment);

    // Initialize application state
    let state = AppState::new(&config).await?;

    // Build router
    let app = api::create_router(state);

    // Start HTTP server
    let addr = format!("0.0.0.0:{}", config.http_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("atelier-server listening on {addr}");

    axum::serve(listener, app).await?;

    Ok(())
}

//! moviweb - personal movie catalog with OMDb enrichment
//!
//! Serves the embedded web UI and JSON API backed by SQLite. Movie metadata
//! can be filled in automatically by title lookup against the OMDb API.

use anyhow::Result;
use tracing::{info, warn};

use moviweb::config::Config;
use moviweb::services::enrichment::Enricher;
use moviweb::services::omdb_client::OmdbClient;
use moviweb::{build_router, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    // Build identification immediately after tracing init
    info!(
        "Starting MoviWeb v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("MOVIWEB_GIT_REV"),
        env!("MOVIWEB_BUILD_TIME"),
        env!("MOVIWEB_BUILD_PROFILE")
    );

    let config = Config::load()?;

    if config.omdb_api_key.is_none() {
        warn!(
            "OMDb API key not configured; title lookup will report not-found. \
             Set MOVIWEB_OMDB_API_KEY or omdb_api_key in moviweb.toml."
        );
    }
    if config.secret.is_empty() {
        info!("API authentication disabled (empty secret)");
    }

    info!("Database path: {}", config.database.display());
    let pool = moviweb::db::init_database_pool(&config.database).await?;
    info!("Database connection established");

    let omdb = OmdbClient::new(config.omdb_api_key.clone())?;
    let state = AppState::new(pool, Enricher::new(omdb), config.secret.clone());
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind).await?;
    info!("MoviWeb listening on http://{}", config.bind);
    info!("Health check: http://{}/health", config.bind);

    axum::serve(listener, app).await?;

    Ok(())
}

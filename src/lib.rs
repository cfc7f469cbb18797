//! moviweb library - personal movie catalog with external metadata enrichment
//!
//! Users register, curate a list of movies, and may populate a movie's fields
//! automatically by title lookup against the OMDb API.

use std::sync::Arc;

use axum::Router;
use sqlx::SqlitePool;

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod services;

use services::enrichment::Enricher;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: SqlitePool,
    /// Enrichment orchestrator (owns the OMDb client)
    pub enricher: Arc<Enricher>,
    /// Shared secret for API routes; empty string disables auth checking
    pub secret: String,
}

impl AppState {
    /// Create new application state
    pub fn new(db: SqlitePool, enricher: Enricher, secret: String) -> Self {
        Self {
            db,
            enricher: Arc::new(enricher),
            secret,
        }
    }
}

/// Build application router
///
/// All /api routes pass through the shared-secret middleware; the embedded UI
/// and the health endpoint are public.
pub fn build_router(state: AppState) -> Router {
    use axum::middleware;
    use axum::routing::{delete, get, post};

    // API routes (shared-secret checked when a secret is configured)
    let api = Router::new()
        .route("/api/users", get(api::list_users).post(api::register_user))
        .route("/api/users/:user_id", delete(api::delete_user))
        .route(
            "/api/users/:user_id/movies",
            get(api::list_movies).post(api::add_movie),
        )
        .route("/api/users/:user_id/movies/lookup", post(api::lookup_movie))
        .route(
            "/api/users/:user_id/movies/:movie_id",
            axum::routing::patch(api::rename_movie).delete(api::delete_movie),
        )
        .layer(middleware::from_fn_with_state(
            state.clone(),
            api::auth_middleware,
        ));

    // Public routes (no authentication)
    let public = Router::new()
        .route("/", get(api::serve_index))
        .route("/static/app.js", get(api::serve_app_js))
        .merge(api::health_routes());

    Router::new().merge(api).merge(public).with_state(state)
}

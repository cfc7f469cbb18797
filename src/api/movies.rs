//! Movie endpoints
//!
//! Manual CRUD plus the title-lookup endpoint that drives enrichment.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde_json::json;

use crate::db::movies::{list_movies_by_user, Movie, NewMovie};
use crate::db::users::get_user_by_id;
use crate::error::{ApiError, ApiResult};
use crate::services::catalog;
use crate::services::enrichment::EnrichOutcome;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct AddMovieRequest {
    pub title: String,
    #[serde(default)]
    pub publication_year: Option<i64>,
    #[serde(default)]
    pub genre: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub poster_url: Option<String>,
    #[serde(default)]
    pub director: Option<String>,
    #[serde(default)]
    pub runtime: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LookupMovieRequest {
    pub title: String,
}

#[derive(Debug, Deserialize)]
pub struct RenameMovieRequest {
    pub title: String,
}

/// GET /api/users/:user_id/movies
///
/// An unknown user simply has no movies; absence is not an error here.
pub async fn list_movies(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> ApiResult<Json<Vec<Movie>>> {
    Ok(Json(list_movies_by_user(&state.db, user_id).await?))
}

/// POST /api/users/:user_id/movies
pub async fn add_movie(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
    Json(req): Json<AddMovieRequest>,
) -> ApiResult<(StatusCode, Json<Movie>)> {
    let movie = catalog::add_movie(
        &state.db,
        NewMovie {
            title: req.title,
            publication_year: req.publication_year,
            genre: req.genre,
            rating: req.rating,
            poster_url: req.poster_url,
            director: req.director,
            runtime: req.runtime,
            user_id,
        },
    )
    .await?;

    Ok((StatusCode::CREATED, Json(movie)))
}

/// POST /api/users/:user_id/movies/lookup
///
/// Fetches metadata for the title and persists the enriched movie. Every
/// negative provider outcome surfaces as 404; the UI falls back to the
/// manual add form.
pub async fn lookup_movie(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
    Json(req): Json<LookupMovieRequest>,
) -> ApiResult<(StatusCode, Json<Movie>)> {
    if get_user_by_id(&state.db, user_id).await?.is_none() {
        return Err(ApiError::NotFound(format!("User {} not found", user_id)));
    }

    match state.enricher.enrich(&state.db, &req.title, user_id).await? {
        EnrichOutcome::Enriched(movie) => Ok((StatusCode::CREATED, Json(movie))),
        EnrichOutcome::NotFound => Err(ApiError::NotFound(format!(
            "No movie found for '{}'",
            req.title.trim()
        ))),
    }
}

/// PATCH /api/users/:user_id/movies/:movie_id
pub async fn rename_movie(
    State(state): State<AppState>,
    Path((user_id, movie_id)): Path<(i64, i64)>,
    Json(req): Json<RenameMovieRequest>,
) -> ApiResult<Json<Movie>> {
    let movie = catalog::rename_movie(&state.db, user_id, movie_id, &req.title).await?;
    Ok(Json(movie))
}

/// DELETE /api/users/:user_id/movies/:movie_id
pub async fn delete_movie(
    State(state): State<AppState>,
    Path((user_id, movie_id)): Path<(i64, i64)>,
) -> ApiResult<Json<serde_json::Value>> {
    catalog::remove_movie(&state.db, user_id, movie_id).await?;
    Ok(Json(json!({ "status": "deleted" })))
}

//! Enrichment orchestrator
//!
//! Drives the fetch -> normalize -> persist flow for title lookup and
//! reports a single outcome. Provider and network faults are absorbed here
//! and surfaced uniformly as NotFound; only input and persistence failures
//! become errors.

use sqlx::SqlitePool;
use tracing::{info, warn};

use super::normalizer;
use super::omdb_client::{OmdbClient, OmdbError};
use crate::db::movies::{self, Movie, NewMovie};
use crate::error::{ApiError, ApiResult};

/// Outcome of an enrichment attempt
///
/// NotFound covers every negative path: provider said no match, network
/// failed, payload was malformed, or no API key is configured. The caller
/// cannot distinguish why and should offer manual entry as the fallback.
#[derive(Debug)]
pub enum EnrichOutcome {
    Enriched(Movie),
    NotFound,
}

/// Enrichment orchestrator
pub struct Enricher {
    omdb: OmdbClient,
}

impl Enricher {
    pub fn new(omdb: OmdbClient) -> Self {
        Self { omdb }
    }

    /// Look up a title with the provider and persist the enriched movie
    ///
    /// Exactly one outbound request per invocation; exactly one row
    /// persisted on success, zero on any failure path.
    pub async fn enrich(
        &self,
        pool: &SqlitePool,
        title: &str,
        user_id: i64,
    ) -> ApiResult<EnrichOutcome> {
        let title = title.trim();
        if title.is_empty() {
            // Rejected before any network call
            return Err(ApiError::BadRequest("Title must not be empty".to_string()));
        }

        let payload = match self.omdb.fetch_by_title(title).await {
            Ok(payload) => payload,
            Err(OmdbError::MissingApiKey) => {
                warn!("OMDb API key not configured; enrichment attempt failed");
                return Ok(EnrichOutcome::NotFound);
            }
            Err(e) => {
                warn!(title = %title, error = %e, "Metadata fetch failed");
                return Ok(EnrichOutcome::NotFound);
            }
        };

        let Some(record) = normalizer::normalize(&payload, title) else {
            return Ok(EnrichOutcome::NotFound);
        };

        let movie = movies::insert_movie(
            pool,
            &NewMovie {
                title: record.title,
                publication_year: record.publication_year,
                genre: Some(record.genre),
                rating: record.rating,
                poster_url: record.poster_url,
                director: record.director,
                runtime: record.runtime,
                user_id,
            },
        )
        .await
        .map_err(|e| {
            warn!(user_id, error = %e, "Failed to persist enriched movie");
            ApiError::Internal("Failed to save movie".to_string())
        })?;

        info!(
            movie_id = movie.id,
            user_id,
            title = %movie.title,
            "Movie enriched from OMDb"
        );

        Ok(EnrichOutcome::Enriched(movie))
    }
}

//! OMDb API client
//!
//! Title-parameterized GET against the OMDb endpoint with a bounded timeout.
//! The payload field names and the "N/A" sentinel are part of the provider's
//! wire contract and are matched exactly.

use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

const OMDB_BASE_URL: &str = "https://www.omdbapi.com/";
const REQUEST_TIMEOUT_SECS: u64 = 5;

/// OMDb client errors
#[derive(Debug, Error)]
pub enum OmdbError {
    #[error("OMDb API key not configured")]
    MissingApiKey,

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("API error {0}: {1}")]
    ApiError(u16, String),

    #[error("Parse error: {0}")]
    ParseError(String),
}

/// Raw OMDb payload, loosely typed exactly as the provider sends it
///
/// Every field except the success indicator may be absent. Year and rating
/// arrive as strings and are validated by the normalizer, not here.
#[derive(Debug, Clone, Deserialize)]
pub struct OmdbPayload {
    /// Success indicator: "True" or "False"
    #[serde(rename = "Response")]
    pub response: String,
    #[serde(rename = "Title")]
    pub title: Option<String>,
    #[serde(rename = "Year")]
    pub year: Option<String>,
    #[serde(rename = "Genre")]
    pub genre: Option<String>,
    #[serde(rename = "imdbRating")]
    pub imdb_rating: Option<String>,
    #[serde(rename = "Poster")]
    pub poster: Option<String>,
    #[serde(rename = "Director")]
    pub director: Option<String>,
    #[serde(rename = "Runtime")]
    pub runtime: Option<String>,
    /// Provider error message, set when response is "False"
    #[serde(rename = "Error")]
    pub error: Option<String>,
}

impl OmdbPayload {
    /// True when the provider reported a match
    pub fn found(&self) -> bool {
        self.response.eq_ignore_ascii_case("true")
    }
}

/// OMDb API client
pub struct OmdbClient {
    http_client: reqwest::Client,
    api_key: Option<String>,
    base_url: String,
}

impl OmdbClient {
    pub fn new(api_key: Option<String>) -> Result<Self, OmdbError> {
        Self::with_base_url(api_key, OMDB_BASE_URL)
    }

    /// Client pointed at an alternate endpoint (used by tests)
    pub fn with_base_url(
        api_key: Option<String>,
        base_url: impl Into<String>,
    ) -> Result<Self, OmdbError> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| OmdbError::NetworkError(e.to_string()))?;

        Ok(Self {
            http_client,
            api_key,
            base_url: base_url.into(),
        })
    }

    /// Fetch metadata for a title
    ///
    /// Fails with MissingApiKey before any network call when no key is
    /// configured. A provider-side "not found" is NOT an error here; it
    /// comes back as a payload with response = "False".
    pub async fn fetch_by_title(&self, title: &str) -> Result<OmdbPayload, OmdbError> {
        let api_key = self
            .api_key
            .as_deref()
            .filter(|k| !k.trim().is_empty())
            .ok_or(OmdbError::MissingApiKey)?;

        tracing::debug!(title = %title, "Querying OMDb API");

        let response = self
            .http_client
            .get(&self.base_url)
            .query(&[("apikey", api_key), ("t", title)])
            .send()
            .await
            .map_err(|e| OmdbError::NetworkError(e.to_string()))?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(OmdbError::ApiError(status.as_u16(), error_text));
        }

        let payload: OmdbPayload = response
            .json()
            .await
            .map_err(|e| OmdbError::ParseError(e.to_string()))?;

        tracing::debug!(
            title = %title,
            found = payload.found(),
            "OMDb response received"
        );

        Ok(payload)
    }
}

//! Metadata normalizer
//!
//! Pure transformation of a raw OMDb payload into a validated record, or
//! None when the provider reported no match. No network or storage side
//! effects happen here.

use super::omdb_client::OmdbPayload;

/// Substituted when the provider omits the genre
pub const UNKNOWN_GENRE: &str = "Unknown";

/// Rating sentinel the provider uses for "no value"
const NOT_AVAILABLE: &str = "N/A";

/// Validated movie metadata
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedMovie {
    pub title: String,
    pub genre: String,
    pub publication_year: Option<i64>,
    pub rating: Option<f64>,
    pub poster_url: Option<String>,
    pub director: Option<String>,
    pub runtime: Option<String>,
}

/// Normalize a raw provider payload
///
/// None means "no data" - a normal outcome, not an error. Malformed field
/// values (non-digit year, unparseable rating) degrade to per-field None
/// instead of failing the whole record.
pub fn normalize(raw: &OmdbPayload, requested_title: &str) -> Option<NormalizedMovie> {
    if !raw.found() {
        tracing::debug!(
            title = %requested_title,
            provider_error = ?raw.error,
            "Provider reported no match"
        );
        return None;
    }

    let title = raw
        .title
        .clone()
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| requested_title.to_string());

    let genre = raw
        .genre
        .clone()
        .filter(|g| !g.is_empty())
        .unwrap_or_else(|| UNKNOWN_GENRE.to_string());

    Some(NormalizedMovie {
        title,
        genre,
        publication_year: parse_year(raw.year.as_deref()),
        rating: parse_rating(raw.imdb_rating.as_deref()),
        poster_url: raw.poster.clone(),
        director: raw.director.clone(),
        runtime: raw.runtime.clone(),
    })
}

/// Accept the year only if it is entirely decimal digits
///
/// The provider sends ranges like "2011-2019" for series; those yield None.
fn parse_year(year: Option<&str>) -> Option<i64> {
    let year = year?;
    if year.is_empty() || !year.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    year.parse().ok()
}

/// Accept the rating only if present, not the "N/A" sentinel, and parseable
fn parse_rating(rating: Option<&str>) -> Option<f64> {
    let rating = rating?;
    if rating == NOT_AVAILABLE {
        return None;
    }
    match rating.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::debug!(rating = %rating, "Unparseable rating from provider");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn found_payload() -> OmdbPayload {
        serde_json::from_str(
            r#"{
                "Title": "Inception",
                "Year": "2010",
                "Genre": "Action, Sci-Fi",
                "imdbRating": "8.8",
                "Poster": "https://example.com/p.jpg",
                "Director": "Christopher Nolan",
                "Runtime": "148 min",
                "Response": "True"
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_provider_failure_yields_no_data() {
        let payload: OmdbPayload =
            serde_json::from_str(r#"{"Response": "False", "Error": "Movie not found!"}"#).unwrap();

        assert!(normalize(&payload, "Zzznonexistent1234").is_none());
    }

    #[test]
    fn test_full_payload_normalizes() {
        let record = normalize(&found_payload(), "inception").unwrap();

        assert_eq!(record.title, "Inception");
        assert_eq!(record.genre, "Action, Sci-Fi");
        assert_eq!(record.publication_year, Some(2010));
        assert_eq!(record.rating, Some(8.8));
        assert_eq!(record.poster_url.as_deref(), Some("https://example.com/p.jpg"));
        assert_eq!(record.director.as_deref(), Some("Christopher Nolan"));
        assert_eq!(record.runtime.as_deref(), Some("148 min"));
    }

    #[test]
    fn test_title_falls_back_to_requested() {
        let mut payload = found_payload();
        payload.title = None;

        let record = normalize(&payload, "Inception").unwrap();
        assert_eq!(record.title, "Inception");
    }

    #[test]
    fn test_missing_genre_defaults_to_unknown() {
        let mut payload = found_payload();
        payload.genre = None;
        assert_eq!(normalize(&payload, "x").unwrap().genre, UNKNOWN_GENRE);

        payload.genre = Some(String::new());
        assert_eq!(normalize(&payload, "x").unwrap().genre, UNKNOWN_GENRE);
    }

    #[test]
    fn test_year_range_yields_none() {
        let mut payload = found_payload();
        payload.year = Some("2011-2019".to_string());
        assert_eq!(normalize(&payload, "x").unwrap().publication_year, None);

        // En-dash variant the provider uses for ongoing series
        payload.year = Some("2011\u{2013}2019".to_string());
        assert_eq!(normalize(&payload, "x").unwrap().publication_year, None);
    }

    #[test]
    fn test_missing_or_empty_year_yields_none() {
        let mut payload = found_payload();
        payload.year = None;
        assert_eq!(normalize(&payload, "x").unwrap().publication_year, None);

        payload.year = Some(String::new());
        assert_eq!(normalize(&payload, "x").unwrap().publication_year, None);
    }

    #[test]
    fn test_rating_sentinel_yields_none() {
        let mut payload = found_payload();
        payload.imdb_rating = Some("N/A".to_string());
        assert_eq!(normalize(&payload, "x").unwrap().rating, None);
    }

    #[test]
    fn test_unparseable_rating_yields_none() {
        let mut payload = found_payload();
        payload.imdb_rating = Some("eight point eight".to_string());
        assert_eq!(normalize(&payload, "x").unwrap().rating, None);
    }

    #[test]
    fn test_missing_passthrough_fields_stay_none() {
        let mut payload = found_payload();
        payload.poster = None;
        payload.director = None;
        payload.runtime = None;

        let record = normalize(&payload, "x").unwrap();
        assert!(record.poster_url.is_none());
        assert!(record.director.is_none());
        assert!(record.runtime.is_none());
    }
}

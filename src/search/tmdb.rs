//! TMDB movie search provider.
//!
//! One `GET {base_url}/search/movie?api_key=..&query=..` per search. No
//! retries and no timeout beyond reqwest's defaults.

use async_trait::async_trait;
use log::{debug, info, warn};
use serde::Deserialize;

use crate::core::search::MovieResult;
use crate::search::{MovieSearch, SearchError};

// ============================================================================
// TMDB API Types
// ============================================================================

#[derive(Deserialize, Debug)]
struct SearchResponse {
    results: Vec<Movie>,
}

#[derive(Deserialize, Debug)]
struct Movie {
    title: String,
    #[serde(default)]
    overview: String,
    poster_path: Option<String>,
    #[serde(default)]
    vote_average: f64,
}

// ============================================================================
// Translation Layer
// ============================================================================

fn to_result(movie: Movie, image_base_url: &str) -> MovieResult {
    MovieResult {
        title: movie.title,
        description: movie.overview,
        image: movie
            .poster_path
            .map(|poster| format!("{image_base_url}{poster}")),
        price: format!("{:.2}", movie.vote_average),
    }
}

// ============================================================================
// Provider Implementation
// ============================================================================

pub struct TmdbClient {
    api_key: Option<String>,
    base_url: String,
    image_base_url: String,
    client: reqwest::Client,
}

impl TmdbClient {
    pub fn new(api_key: Option<String>, base_url: String, image_base_url: String) -> Self {
        Self {
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            image_base_url,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl MovieSearch for TmdbClient {
    fn name(&self) -> &str {
        "tmdb"
    }

    async fn search(&self, query: &str) -> Result<Vec<MovieResult>, SearchError> {
        let api_key = self.api_key.as_deref().ok_or_else(|| {
            SearchError::Config(
                "TMDB API key not set (config file or TMDB_API_KEY env var)".to_string(),
            )
        })?;

        info!("TMDB search request: query={:?}", query);

        let response = self
            .client
            .get(format!("{}/search/movie", self.base_url))
            .query(&[("api_key", api_key), ("query", query)])
            .send()
            .await
            .map_err(|e| SearchError::Network(e.to_string()))?;

        debug!("TMDB response status: {}", response.status());

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let err_body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("TMDB API error: {} - {}", status, err_body);
            return Err(SearchError::Api {
                status,
                message: err_body,
            });
        }

        let body: SearchResponse = response
            .json()
            .await
            .map_err(|e| SearchError::Parse(e.to_string()))?;

        Ok(body
            .results
            .into_iter()
            .map(|movie| to_result(movie, &self.image_base_url))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const IMAGE_BASE: &str = "https://image.tmdb.org/t/p/w500";

    #[test]
    fn test_to_result_formats_rating_and_poster() {
        let movie = Movie {
            title: "Alien".to_string(),
            overview: "In space no one can hear you scream.".to_string(),
            poster_path: Some("/alien.jpg".to_string()),
            vote_average: 8.1,
        };
        let result = to_result(movie, IMAGE_BASE);
        assert_eq!(result.title, "Alien");
        assert_eq!(result.price, "8.10");
        assert_eq!(
            result.image.as_deref(),
            Some("https://image.tmdb.org/t/p/w500/alien.jpg")
        );
    }

    #[test]
    fn test_to_result_without_poster() {
        let movie = Movie {
            title: "Obscure".to_string(),
            overview: String::new(),
            poster_path: None,
            vote_average: 0.0,
        };
        let result = to_result(movie, IMAGE_BASE);
        assert!(result.image.is_none());
        assert_eq!(result.price, "0.00");
    }

    #[test]
    fn test_response_parses_sparse_movies() {
        let json = r#"{"page":1,"results":[{"title":"Her","poster_path":null}]}"#;
        let response: SearchResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.results.len(), 1);
        assert_eq!(response.results[0].overview, "");
        assert_eq!(response.results[0].vote_average, 0.0);
    }

    #[tokio::test]
    async fn test_missing_api_key_is_config_error() {
        let client = TmdbClient::new(None, "http://localhost:1".to_string(), IMAGE_BASE.to_string());
        let result = client.search("alien").await;
        assert!(matches!(result, Err(SearchError::Config(_))));
    }
}

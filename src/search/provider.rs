use std::fmt;

use async_trait::async_trait;

use crate::core::search::MovieResult;

/// Errors that can occur while querying a movie search provider.
#[derive(Debug)]
pub enum SearchError {
    /// Provider misconfigured (missing API key, bad URL).
    Config(String),
    /// Network-level failure (DNS, connection refused).
    Network(String),
    /// API returned an error response.
    Api { status: u16, message: String },
    /// Failed to parse the provider's response.
    Parse(String),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::Config(msg) => write!(f, "config error: {msg}"),
            SearchError::Network(msg) => write!(f, "network error: {msg}"),
            SearchError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            SearchError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for SearchError {}

#[async_trait]
pub trait MovieSearch: Send + Sync {
    /// Returns the name of the provider.
    fn name(&self) -> &str;

    /// Runs one free-text query and returns the matching movies in provider order.
    async fn search(&self, query: &str) -> Result<Vec<MovieResult>, SearchError>;
}

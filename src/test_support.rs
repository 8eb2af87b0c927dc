//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use async_trait::async_trait;
use std::sync::Mutex;

use crate::core::ledger::seed_friends;
use crate::core::search::MovieResult;
use crate::core::state::App;
use crate::search::{MovieSearch, SearchError};

/// A provider that records every query and answers without touching the network.
pub struct CountingSearch {
    queries: Mutex<Vec<String>>,
    fail: bool,
}

impl CountingSearch {
    pub fn ok() -> Self {
        Self {
            queries: Mutex::new(Vec::new()),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            queries: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn calls(&self) -> usize {
        self.queries.lock().unwrap().len()
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl MovieSearch for CountingSearch {
    fn name(&self) -> &str {
        "counting"
    }

    async fn search(&self, query: &str) -> Result<Vec<MovieResult>, SearchError> {
        self.queries.lock().unwrap().push(query.to_string());
        if self.fail {
            return Err(SearchError::Network("connection refused".to_string()));
        }
        Ok(vec![movie(&format!("{query} result"))])
    }
}

pub fn movie(title: &str) -> MovieResult {
    MovieResult {
        title: title.to_string(),
        description: format!("About {title}"),
        image: None,
        price: "7.00".to_string(),
    }
}

/// Creates a test App with the built-in friends.
pub fn test_app() -> App {
    App::new(seed_friends(), "€".to_string())
}

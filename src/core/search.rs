//! # Search State
//!
//! The movie-search widget as a small reducer. The state is replaced in
//! place by `apply()`; nothing else writes to it.
//!
//! ```text
//!             StartSearch              FinishSearch
//!   Idle ─────────────────► Searching ─────────────► Ready
//!    ▲                          │  ▲                   │
//!    │        CleanQuery        │  └───StartSearch─────┘
//!    └──────────────────────────┘
//! ```
//!
//! `UpdateSelection` only rewrites `value`; the phase is unchanged.

/// One suggestion in the search dropdown.
#[derive(Debug, Clone, PartialEq)]
pub struct MovieResult {
    pub title: String,
    pub description: String,
    pub image: Option<String>,
    /// Rating with two decimals, shown where a price would sit.
    pub price: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SearchAction {
    CleanQuery,
    StartSearch(String),
    FinishSearch(Vec<MovieResult>),
    UpdateSelection(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchPhase {
    Idle,
    Searching,
    Ready,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchState {
    pub loading: bool,
    /// Results of the last completed search, which may predate `value`.
    pub results: Vec<MovieResult>,
    pub value: String,
}

impl SearchState {
    pub fn apply(&mut self, action: SearchAction) {
        match action {
            SearchAction::CleanQuery => *self = SearchState::default(),
            SearchAction::StartSearch(query) => {
                self.loading = true;
                self.value = query;
            }
            SearchAction::FinishSearch(results) => {
                self.loading = false;
                self.results = results;
            }
            SearchAction::UpdateSelection(title) => self.value = title,
        }
    }

    pub fn phase(&self) -> SearchPhase {
        if self.loading {
            SearchPhase::Searching
        } else if self.value.is_empty() && self.results.is_empty() {
            SearchPhase::Idle
        } else {
            SearchPhase::Ready
        }
    }
}

//! # Application State
//!
//! Core business state for EvenUp. Domain logic only, no TUI types.
//! Presentation state (focus, cursors, form buffers) lives in the `tui` module.
//!
//! ```text
//! App
//! ├── ledger: Ledger            // friends, selection, add-form visibility
//! ├── search: SearchState       // movie search box
//! ├── search_ticket: u64        // id of the latest scheduled debounce timer
//! ├── currency: String          // symbol appended to balances
//! └── status_message: String    // title bar text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use crate::core::config::ResolvedConfig;
use crate::core::ledger::{Friend, Ledger};
use crate::core::search::SearchState;

pub struct App {
    pub ledger: Ledger,
    pub search: SearchState,
    /// Bumped on every keystroke; timer fires carrying an older ticket are ignored.
    pub search_ticket: u64,
    pub currency: String,
    pub status_message: String,
}

impl App {
    pub fn new(friends: Vec<Friend>, currency: String) -> Self {
        Self {
            ledger: Ledger::new(friends),
            search: SearchState::default(),
            search_ticket: 0,
            currency,
            status_message: String::from("Welcome to EvenUp!"),
        }
    }

    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self::new(config.friends.clone(), config.currency.clone())
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::test_app;

    #[test]
    fn test_app_new_defaults() {
        let app = test_app();
        assert_eq!(app.status_message, "Welcome to EvenUp!");
        assert_eq!(app.ledger.friends.len(), 3);
        assert!(app.ledger.selected.is_none());
        assert_eq!(app.search_ticket, 0);
        assert_eq!(app.currency, "€");
    }
}

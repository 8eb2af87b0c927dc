//! # Actions
//!
//! Everything that can happen in EvenUp becomes an `Action`.
//! User presses Enter on a friend? That's `Action::SelectFriend(id)`.
//! Debounce timer fires? That's `Action::DebounceElapsed { .. }`.
//!
//! `update()` takes the current state and an action, mutates the state, and
//! returns an `Effect` describing any I/O the caller should perform. No side
//! effects happen here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{debug, info, warn};

use crate::core::ledger::Friend;
use crate::core::search::{MovieResult, SearchAction};
use crate::core::state::App;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    ToggleAddFriendForm,
    AddFriend(Friend),
    SelectFriend(String),
    SplitBill(f64),
    /// The search box text changed.
    SearchChanged(String),
    /// A debounce timer finished its quiet period.
    DebounceElapsed { ticket: u64, query: String },
    SearchFinished(Vec<MovieResult>),
    SearchFailed(String),
    /// A suggestion was picked from the dropdown.
    SelectResult(String),
    Quit,
}

/// I/O requested by `update()`.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    Quit,
    /// Replace any pending debounce timer with a new one.
    ScheduleSearch { ticket: u64, query: String },
    /// Issue one query against the movie search provider.
    RunSearch(String),
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::ToggleAddFriendForm => {
            app.ledger.toggle_add_form();
            Effect::None
        }
        Action::AddFriend(friend) => {
            app.status_message = format!("Added {}", friend.name);
            app.ledger.add_friend(friend);
            Effect::None
        }
        Action::SelectFriend(id) => {
            app.ledger.select_friend(&id);
            Effect::None
        }
        Action::SplitBill(amount) => {
            let name = app.ledger.selected_friend().map(|f| f.name.clone());
            match app.ledger.split_bill(amount) {
                Ok(()) => {
                    if let Some(name) = name {
                        app.status_message = format!("Split bill with {name}");
                    }
                }
                Err(e) => warn!("Ignoring bill split of {}: {}", amount, e),
            }
            Effect::None
        }
        Action::SearchChanged(text) => {
            app.search.apply(SearchAction::StartSearch(text.clone()));
            app.search_ticket += 1;
            Effect::ScheduleSearch {
                ticket: app.search_ticket,
                query: text,
            }
        }
        Action::DebounceElapsed { ticket, query } => {
            if ticket != app.search_ticket {
                debug!(
                    "Ignoring stale debounce fire (ticket={}, current={})",
                    ticket, app.search_ticket
                );
                return Effect::None;
            }
            if query.is_empty() {
                app.search.apply(SearchAction::CleanQuery);
                return Effect::None;
            }
            info!("Debounce elapsed, searching for {:?}", query);
            Effect::RunSearch(query)
        }
        Action::SearchFinished(results) => {
            debug!("Search finished with {} results", results.len());
            app.search.apply(SearchAction::FinishSearch(results));
            Effect::None
        }
        Action::SearchFailed(message) => {
            // Loading stays set: the widget has no error state.
            warn!("Movie search failed: {}", message);
            Effect::None
        }
        Action::SelectResult(title) => {
            app.search.apply(SearchAction::UpdateSelection(title));
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::search::SearchPhase;
    use crate::test_support::{movie, test_app};

    #[test]
    fn test_search_changed_schedules_with_fresh_ticket() {
        let mut app = test_app();

        let first = update(&mut app, Action::SearchChanged("a".to_string()));
        let second = update(&mut app, Action::SearchChanged("al".to_string()));

        assert_eq!(first, Effect::ScheduleSearch { ticket: 1, query: "a".to_string() });
        assert_eq!(second, Effect::ScheduleSearch { ticket: 2, query: "al".to_string() });
        assert_eq!(app.search.phase(), SearchPhase::Searching);
        assert_eq!(app.search.value, "al");
    }

    #[test]
    fn test_stale_debounce_fire_is_ignored() {
        let mut app = test_app();
        update(&mut app, Action::SearchChanged("a".to_string()));
        update(&mut app, Action::SearchChanged("al".to_string()));

        let effect = update(
            &mut app,
            Action::DebounceElapsed { ticket: 1, query: "a".to_string() },
        );
        assert_eq!(effect, Effect::None);
    }

    #[test]
    fn test_current_debounce_fire_runs_search() {
        let mut app = test_app();
        update(&mut app, Action::SearchChanged("alien".to_string()));
        let effect = update(
            &mut app,
            Action::DebounceElapsed { ticket: 1, query: "alien".to_string() },
        );
        assert_eq!(effect, Effect::RunSearch("alien".to_string()));
    }

    #[test]
    fn test_empty_query_fire_resets_to_idle() {
        let mut app = test_app();
        update(&mut app, Action::SearchFinished(vec![movie("Alien")]));
        update(&mut app, Action::SearchChanged(String::new()));

        let effect = update(
            &mut app,
            Action::DebounceElapsed { ticket: 1, query: String::new() },
        );
        assert_eq!(effect, Effect::None);
        assert_eq!(app.search.phase(), SearchPhase::Idle);
        assert!(app.search.results.is_empty());
    }

    #[test]
    fn test_search_failure_leaves_state_untouched() {
        let mut app = test_app();
        update(&mut app, Action::SearchChanged("alien".to_string()));
        let before = app.search.clone();

        update(&mut app, Action::SearchFailed("network error: refused".to_string()));
        assert_eq!(app.search, before);
        assert!(app.search.loading);
    }

    #[test]
    fn test_late_result_still_overwrites() {
        let mut app = test_app();
        update(&mut app, Action::SearchChanged("alien".to_string()));
        update(&mut app, Action::SearchChanged("aliens".to_string()));
        update(&mut app, Action::SearchFinished(vec![movie("Alien")]));

        assert_eq!(app.search.value, "aliens");
        assert_eq!(app.search.results, vec![movie("Alien")]);
    }

    #[test]
    fn test_select_result_sets_value() {
        let mut app = test_app();
        update(&mut app, Action::SearchFinished(vec![movie("Alien")]));
        update(&mut app, Action::SelectResult("Alien".to_string()));
        assert_eq!(app.search.value, "Alien");
        assert_eq!(app.search.results.len(), 1);
    }

    #[test]
    fn test_split_bill_updates_status() {
        let mut app = test_app();
        update(&mut app, Action::SelectFriend("933372".to_string()));
        update(&mut app, Action::SplitBill(70.0));

        assert_eq!(app.ledger.friends[1].balance, 90.0);
        assert!(app.ledger.selected.is_none());
        assert_eq!(app.status_message, "Split bill with Sarah");
    }

    #[test]
    fn test_split_bill_without_selection_is_noop() {
        let mut app = test_app();
        let before = app.ledger.friends.clone();
        assert_eq!(update(&mut app, Action::SplitBill(5.0)), Effect::None);
        assert_eq!(app.ledger.friends, before);
    }

    #[test]
    fn test_add_friend_and_toggle_form() {
        let mut app = test_app();
        update(&mut app, Action::ToggleAddFriendForm);
        assert!(app.ledger.show_add_form);

        update(&mut app, Action::AddFriend(Friend::new("x", "Dana", "img")));
        assert_eq!(app.ledger.friends.len(), 4);
        assert_eq!(app.status_message, "Added Dana");
    }

    #[test]
    fn test_quit() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }
}

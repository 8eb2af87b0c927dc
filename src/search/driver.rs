//! # Search Driver
//!
//! Carries out the search-related `Effect`s returned by `update()`:
//! scheduling the debounce timer and spawning provider queries. Results come
//! back to the event loop as `Action`s on the same channel.
//!
//! Queries are not cancelled once spawned. A response that lands after a newer
//! keystroke still replaces the results.

use log::{debug, info, warn};
use std::sync::{Arc, mpsc};
use std::time::Duration;

use crate::core::action::{Action, Effect};
use crate::search::{Debouncer, MovieSearch};

pub struct SearchDriver {
    provider: Arc<dyn MovieSearch>,
    debouncer: Debouncer,
    tx: mpsc::Sender<Action>,
}

impl SearchDriver {
    pub fn new(provider: Arc<dyn MovieSearch>, delay: Duration, tx: mpsc::Sender<Action>) -> Self {
        Self {
            provider,
            debouncer: Debouncer::new(delay),
            tx,
        }
    }

    /// Performs the effect if it belongs to search; any other effect is handed back.
    pub fn perform(&mut self, effect: Effect) -> Option<Effect> {
        match effect {
            Effect::ScheduleSearch { ticket, query } => {
                debug!("Search #{ticket} due in {:?}", self.debouncer.delay());
                self.debouncer
                    .schedule(Action::DebounceElapsed { ticket, query }, self.tx.clone());
                None
            }
            Effect::RunSearch(query) => {
                self.spawn_query(query);
                None
            }
            Effect::None => None,
            other => Some(other),
        }
    }

    /// Releases the pending timer, if any.
    pub fn shutdown(&mut self) {
        if self.debouncer.is_pending() {
            info!("Releasing pending search timer");
        }
        self.debouncer.cancel();
    }

    fn spawn_query(&self, query: String) {
        info!("Spawning {} search for {:?}", self.provider.name(), query);
        let provider = self.provider.clone();
        let tx = self.tx.clone();

        tokio::spawn(async move {
            let action = match provider.search(&query).await {
                Ok(results) => Action::SearchFinished(results),
                Err(e) => Action::SearchFailed(e.to_string()),
            };
            if tx.send(action).is_err() {
                warn!("Failed to send search outcome for {:?}: receiver dropped", query);
            }
        });
    }
}

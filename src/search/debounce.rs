//! # Debouncer
//!
//! Owns at most one pending timer. Scheduling aborts whatever was pending,
//! then spawns a tokio task that sleeps for the quiet period and sends its
//! action to the event loop. Dropping the debouncer aborts the pending timer.

use log::{debug, warn};
use std::sync::mpsc;
use std::time::Duration;
use tokio::task::AbortHandle;

use crate::core::action::Action;

pub struct Debouncer {
    delay: Duration,
    pending: Option<AbortHandle>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Must be called from within a tokio runtime.
    pub fn schedule(&mut self, action: Action, tx: mpsc::Sender<Action>) {
        self.cancel();

        let delay = self.delay;
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if tx.send(action).is_err() {
                warn!("Failed to deliver debounce fire: receiver dropped");
            }
        });
        self.pending = Some(handle.abort_handle());
    }

    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take()
            && !handle.is_finished()
        {
            debug!("Aborting pending debounce timer");
            handle.abort();
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fire(query: &str) -> Action {
        Action::DebounceElapsed {
            ticket: 0,
            query: query.to_string(),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_fires_after_delay() {
        let (tx, rx) = mpsc::channel();
        let mut debouncer = Debouncer::new(Duration::from_millis(300));

        debouncer.schedule(fire("a"), tx);
        tokio::time::sleep(Duration::from_millis(299)).await;
        assert!(rx.try_recv().is_err());
        assert!(debouncer.is_pending());

        tokio::time::sleep(Duration::from_millis(2)).await;
        assert_eq!(rx.try_recv().ok(), Some(fire("a")));
        assert!(!debouncer.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn test_reschedule_replaces_pending_timer() {
        let (tx, rx) = mpsc::channel();
        let mut debouncer = Debouncer::new(Duration::from_millis(300));

        debouncer.schedule(fire("a"), tx.clone());
        tokio::time::sleep(Duration::from_millis(200)).await;
        debouncer.schedule(fire("ab"), tx);

        tokio::time::sleep(Duration::from_millis(1000)).await;
        let fired: Vec<Action> = rx.try_iter().collect();
        assert_eq!(fired, vec![fire("ab")]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_releases_pending_timer() {
        let (tx, rx) = mpsc::channel();
        let mut debouncer = Debouncer::new(Duration::from_millis(300));
        debouncer.schedule(fire("a"), tx);
        drop(debouncer);

        tokio::time::sleep(Duration::from_millis(1000)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_without_pending_is_noop() {
        let mut debouncer = Debouncer::new(Duration::from_millis(300));
        debouncer.cancel();
        assert!(!debouncer.is_pending());
        assert_eq!(debouncer.delay(), Duration::from_millis(300));
    }
}

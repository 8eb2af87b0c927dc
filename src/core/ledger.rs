//! # Ledger
//!
//! The friends list and the running balance kept with each friend.
//!
//! ```text
//! Ledger
//! ├── friends: Vec<Friend>        // insertion order, never shrinks
//! ├── selected: Option<String>    // id of the friend a bill is split with
//! └── show_add_form: bool         // add-friend form visibility
//! ```
//!
//! ## Balance sign
//!
//! - negative: you owe the friend
//! - positive: the friend owes you
//! - zero: settled

use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Friend {
    pub id: String,
    pub name: String,
    pub image: String,
    #[serde(default)]
    pub balance: f64,
}

impl Friend {
    pub fn new(id: impl Into<String>, name: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            image: image.into(),
            balance: 0.0,
        }
    }

    pub fn with_balance(mut self, balance: f64) -> Self {
        self.balance = balance;
        self
    }

    pub fn status(&self) -> BalanceStatus {
        BalanceStatus::of(self.balance)
    }
}

/// The friends everyone starts with when no `[[friends]]` are configured.
pub fn seed_friends() -> Vec<Friend> {
    vec![
        Friend::new("118836", "Clark", "https://i.pravatar.cc/48?u=118836").with_balance(-7.0),
        Friend::new("933372", "Sarah", "https://i.pravatar.cc/48?u=933372").with_balance(20.0),
        Friend::new("499476", "Anthony", "https://i.pravatar.cc/48?u=499476"),
    ]
}

// ============================================================================
// Balance presentation
// ============================================================================

/// Who owes whom, derived from a balance at render time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BalanceStatus {
    /// You owe the friend this (positive) amount.
    Owe(f64),
    /// The friend owes you this (positive) amount.
    Owed(f64),
    Even,
}

impl BalanceStatus {
    pub fn of(balance: f64) -> Self {
        if balance < 0.0 {
            BalanceStatus::Owe(balance.abs())
        } else if balance > 0.0 {
            BalanceStatus::Owed(balance)
        } else {
            BalanceStatus::Even
        }
    }

    /// Short tag used for styling and tests.
    pub fn tag(&self) -> &'static str {
        match self {
            BalanceStatus::Owe(_) => "owe",
            BalanceStatus::Owed(_) => "owed",
            BalanceStatus::Even => "even",
        }
    }

    /// The sentence shown under a friend's name.
    pub fn describe(&self, name: &str, currency: &str) -> String {
        match self {
            BalanceStatus::Owe(amount) => format!("You owe {name} {amount}{currency}"),
            BalanceStatus::Owed(amount) => format!("{name} owes you {amount}{currency}"),
            BalanceStatus::Even => format!("You and {name} are even!"),
        }
    }
}

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug, PartialEq)]
pub enum LedgerError {
    /// A bill was split while no friend was selected.
    NoSelection,
    /// The selected id no longer matches any friend.
    UnknownFriend(String),
}

impl fmt::Display for LedgerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LedgerError::NoSelection => write!(f, "no friend selected"),
            LedgerError::UnknownFriend(id) => write!(f, "unknown friend id: {id}"),
        }
    }
}

impl std::error::Error for LedgerError {}

// ============================================================================
// Ledger
// ============================================================================

#[derive(Debug, Clone, Default)]
pub struct Ledger {
    pub friends: Vec<Friend>,
    pub selected: Option<String>,
    pub show_add_form: bool,
}

impl Ledger {
    pub fn new(friends: Vec<Friend>) -> Self {
        Self {
            friends,
            selected: None,
            show_add_form: false,
        }
    }

    pub fn add_friend(&mut self, friend: Friend) {
        debug!("Adding friend {} ({})", friend.name, friend.id);
        self.friends.push(friend);
    }

    /// Selects `id`, or clears the selection if it was already selected.
    /// Closes the add-friend form either way.
    pub fn select_friend(&mut self, id: &str) {
        if self.selected.as_deref() == Some(id) {
            self.selected = None;
        } else {
            self.selected = Some(id.to_string());
        }
        self.show_add_form = false;
    }

    pub fn toggle_add_form(&mut self) {
        self.show_add_form = !self.show_add_form;
    }

    pub fn selected_friend(&self) -> Option<&Friend> {
        let id = self.selected.as_deref()?;
        self.friends.iter().find(|f| f.id == id)
    }

    /// Adds `amount` to the selected friend's balance and clears the selection.
    pub fn split_bill(&mut self, amount: f64) -> Result<(), LedgerError> {
        let id = self.selected.as_deref().ok_or(LedgerError::NoSelection)?;
        let friend = self
            .friends
            .iter_mut()
            .find(|f| f.id == id)
            .ok_or_else(|| LedgerError::UnknownFriend(id.to_string()))?;

        friend.balance += amount;
        debug!(
            "Split bill with {}: {:+} → balance {}",
            friend.name, amount, friend.balance
        );
        self.selected = None;
        Ok(())
    }
}

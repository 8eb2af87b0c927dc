//! # Core Application Logic
//!
//! This module contains EvenUp's business logic.
//! It knows nothing about any specific UI technology or the network.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │ Effect
//!                 ┌──────────────┴──────────────┐
//!                 ▼                             ▼
//!          ┌────────────┐                ┌────────────┐
//!          │    TUI     │                │   search   │
//!          │  Adapter   │                │  (timers,  │
//!          │ (ratatui)  │                │   HTTP)    │
//!          └────────────┘                └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct, all application state in one place
//! - [`action`]: The `Action` enum and `update()`
//! - [`ledger`]: Friends, selection and balances
//! - [`forms`]: Add-friend and split-bill form rules
//! - [`search`]: The movie-search reducer
//! - [`config`]: Layered configuration

pub mod action;
pub mod config;
pub mod forms;
pub mod ledger;
pub mod search;
pub mod state;

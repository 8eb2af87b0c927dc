//! # Movie Search
//!
//! The I/O half of the search widget: a provider trait, the TMDB HTTP
//! provider, the debounce timer and the driver that turns `Effect`s into
//! spawned tasks.

pub mod debounce;
pub mod driver;
pub mod provider;
pub mod tmdb;

pub use debounce::Debouncer;
pub use driver::SearchDriver;
pub use provider::{MovieSearch, SearchError};
pub use tmdb::TmdbClient;

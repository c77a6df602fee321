//! Search and popular-tables state for the data catalog.
//!
//! [`store::Store`] holds the reduced state; [`effects::EffectRuntime`] runs
//! the asynchronous workers that talk to the backend and feed their results
//! back in as actions.

pub mod action;
pub mod api;
pub mod config;
pub mod effects;
pub mod error;
pub mod popular_tables;
pub mod search;
pub mod state;
pub mod store;

pub use action::Action;
pub use config::Config;
pub use effects::EffectRuntime;
pub use effects::Services;
pub use error::StateError;
pub use state::AppState;
pub use store::Store;

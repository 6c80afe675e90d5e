//! Shared types for the account search workspace
//!
//! Contains the account data model, the lookup failure vocabulary,
//! configuration and logging helpers used by the searcher crate.

pub mod types;
pub mod errors;
pub mod config;
pub mod logging;

pub use types::*;
pub use errors::*;
pub use config::SearchConfig;

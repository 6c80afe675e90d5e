//! Searcher library for debounced GitHub account search
//!
//! This library provides the lookup client, the debounce primitive, selection
//! and presentation helpers, and the controller that ties them into one
//! interactive loop.

pub mod error;
pub mod types;
pub mod traits;
pub mod core;
pub mod controller_impl;
pub mod services;

// Re-export main types
pub use error::{SearcherError, SearcherResult};
pub use types::*;
pub use traits::*;
pub use controller_impl::SearchController;
pub use crate::core::presentation::SearchView;
pub use services::*;

//! Searcher error types

use thiserror::Error;
use shared::SharedError;

/// Result type for searcher operations
pub type SearcherResult<T> = Result<T, SearcherError>;

/// Searcher error types
#[derive(Error, Debug)]
pub enum SearcherError {
    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Unknown command: {input}")]
    CommandError { input: String },

    #[error("Sequence bound must be a positive integer greater than 0, got {bound}")]
    SequenceBound { bound: i64 },

    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("Shared component error: {0}")]
    Shared(#[from] SharedError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

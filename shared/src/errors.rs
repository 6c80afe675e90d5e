//! Shared error types for the account search workspace

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SharedError {
    #[error("Invalid configuration: {field} = {value}")]
    InvalidConfig { field: String, value: String },

    #[error("Invalid endpoint URL: {input}")]
    InvalidEndpoint { input: String },
}

pub type SharedResult<T> = Result<T, SharedError>;

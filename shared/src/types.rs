//! Core shared types and identifiers

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Numeric account identifier as issued by GitHub
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(u64);

impl AccountId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> u64 {
        self.0
    }

    /// Identifier immediately after this one, wrapping to 0 after `u64::MAX`
    pub fn next(&self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for AccountId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim().parse()?))
    }
}

/// A single search hit
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub id: AccountId,
    pub login: String,
    pub avatar_url: String,
    pub html_url: String,
}

impl Account {
    /// Copy of this account carrying a different identifier
    pub fn with_id(&self, id: AccountId) -> Self {
        Self {
            id,
            ..self.clone()
        }
    }
}

/// Body of a successful search response
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SearchPage {
    #[serde(default)]
    pub total_count: Option<u64>,
    #[serde(default)]
    pub incomplete_results: Option<bool>,
    pub items: Vec<Account>,
}

/// Failure reasons for a single lookup attempt
///
/// Cancellation is deliberately absent: a cancelled lookup resolves to an
/// empty result instead of failing.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LookupFailure {
    /// Request quota exhausted (HTTP 403 / 429)
    #[error("rate limit exceeded")]
    RateLimited,
    /// Network error or non-success status
    #[error("transport error: {0}")]
    Transport(String),
    /// Response body could not be decoded
    #[error("decode error: {0}")]
    Decode(String),
}

impl LookupFailure {
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, LookupFailure::RateLimited)
    }
}

/// Logical component tag attached to log events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    Client,
    Controller,
    Cli,
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Component::Client => write!(f, "client"),
            Component::Controller => write!(f, "controller"),
            Component::Cli => write!(f, "cli"),
        }
    }
}

//! Searcher-specific data types

use shared::{Account, AccountId, LookupFailure};

/// Input accepted by the controller loop
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControllerEvent {
    /// Raw query text replaced (every keystroke / line)
    Input(String),
    /// Clear the query immediately (Escape)
    Clear,
    ToggleEditMode,
    ToggleSelect(AccountId),
    ToggleAll,
    Duplicate,
    Delete,
    Quit,
}

/// Lifecycle phase derived from controller state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchPhase {
    /// No debounced query
    Idle,
    /// Lookup in flight
    Loading,
    /// Lookup settled with records (possibly zero)
    Populated,
    RateLimited,
    Failed,
}

/// Settlement of a spawned lookup, tagged with the generation that issued it
#[derive(Debug, Clone)]
pub struct LookupCompletion {
    pub generation: u64,
    pub query: String,
    pub result: Result<Vec<Account>, LookupFailure>,
}

/// What a single background poll of the controller did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackgroundEvent {
    /// Debounce timer fired with this query
    Debounced(String),
    /// Lookup result applied to state
    Applied { generation: u64 },
    /// Superseded lookup result dropped
    Discarded { generation: u64 },
}

//! Shared helpers for searcher integration tests

#![allow(dead_code)]

pub mod fixtures;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use searcher::AccountLookup;
use shared::{Account, LookupFailure};

/// Canned response for one query
#[derive(Debug, Clone)]
pub struct Scripted {
    pub delay: Duration,
    pub result: Result<Vec<Account>, LookupFailure>,
    /// When false the lookup ignores its cancellation token and settles late
    pub honour_cancel: bool,
}

impl Scripted {
    pub fn ok(delay_ms: u64, accounts: Vec<Account>) -> Self {
        Self {
            delay: Duration::from_millis(delay_ms),
            result: Ok(accounts),
            honour_cancel: true,
        }
    }

    pub fn err(delay_ms: u64, failure: LookupFailure) -> Self {
        Self {
            delay: Duration::from_millis(delay_ms),
            result: Err(failure),
            honour_cancel: true,
        }
    }

    pub fn ignoring_cancel(mut self) -> Self {
        self.honour_cancel = false;
        self
    }
}

/// Lookup double with per-query delays that records every call
#[derive(Debug, Clone, Default)]
pub struct ScriptedLookup {
    script: HashMap<String, Scripted>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl ScriptedLookup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, query: &str, scripted: Scripted) -> Self {
        self.script.insert(query.to_string(), scripted);
        self
    }

    /// Handle that keeps observing calls after the lookup moves into a controller
    pub fn calls(&self) -> Arc<Mutex<Vec<String>>> {
        Arc::clone(&self.calls)
    }
}

#[async_trait]
impl AccountLookup for ScriptedLookup {
    async fn lookup(&self, query: &str, cancel: CancellationToken) -> Result<Vec<Account>, LookupFailure> {
        self.calls.lock().unwrap().push(query.to_string());

        let Some(scripted) = self.script.get(query).cloned() else {
            return Ok(Vec::new());
        };

        if scripted.honour_cancel {
            tokio::select! {
                _ = cancel.cancelled() => return Ok(Vec::new()),
                _ = tokio::time::sleep(scripted.delay) => {}
            }
        } else {
            tokio::time::sleep(scripted.delay).await;
        }

        scripted.result
    }
}

pub fn recorded(calls: &Arc<Mutex<Vec<String>>>) -> Vec<String> {
    calls.lock().unwrap().clone()
}

//! Searcher trait definitions for dependency injection

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use shared::{Account, LookupFailure};

/// Remote account lookup
#[mockall::automock]
#[async_trait]
pub trait AccountLookup: Send + Sync {
    /// Search accounts matching `query`
    ///
    /// An empty query, or a lookup cancelled through `cancel` before it
    /// settles, resolves to an empty list.
    async fn lookup(&self, query: &str, cancel: CancellationToken) -> Result<Vec<Account>, LookupFailure>;
}

//! GitHub user search client

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::StatusCode;
use tokio_util::sync::CancellationToken;

use shared::{component_debug, component_warn, Account, Component, LookupFailure, SearchConfig, SearchPage};
use crate::error::{SearcherError, SearcherResult};
use crate::traits::AccountLookup;

const GITHUB_JSON: &str = "application/vnd.github+json";

/// Real lookup client backed by the GitHub REST API
#[derive(Debug, Clone)]
pub struct GithubClient {
    client: reqwest::Client,
    config: SearchConfig,
}

impl GithubClient {
    /// Create a client with the configured user agent, token and timeout
    pub fn new(config: SearchConfig) -> SearcherResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_JSON));

        if let Some(token) = &config.token {
            let value = HeaderValue::from_str(&format!("Bearer {token}")).map_err(|_| {
                SearcherError::ConfigError {
                    message: "GitHub token contains characters not allowed in a header".to_string(),
                }
            })?;
            headers.insert(AUTHORIZATION, value);
        }

        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .default_headers(headers)
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self { client, config })
    }

    /// Single GET against the search endpoint; no retries
    async fn fetch(&self, query: &str) -> Result<Vec<Account>, LookupFailure> {
        let mut params = vec![("q", query.to_string())];
        if let Some(per_page) = self.config.per_page {
            params.push(("per_page", per_page.to_string()));
        }

        let response = self
            .client
            .get(self.config.endpoint.clone())
            .query(&params)
            .send()
            .await
            .map_err(|e| LookupFailure::Transport(e.to_string()))?;

        let status = response.status();
        if status == StatusCode::FORBIDDEN || status == StatusCode::TOO_MANY_REQUESTS {
            component_warn!(Component::Client, status = %status, "GitHub rate limit hit");
            return Err(LookupFailure::RateLimited);
        }

        if !status.is_success() {
            return Err(LookupFailure::Transport(status.to_string()));
        }

        let page: SearchPage = response
            .json()
            .await
            .map_err(|e| LookupFailure::Decode(e.to_string()))?;

        component_debug!(
            Component::Client,
            items = page.items.len(),
            total = ?page.total_count,
            "Search page received"
        );

        Ok(page.items)
    }
}

#[async_trait]
impl AccountLookup for GithubClient {
    async fn lookup(&self, query: &str, cancel: CancellationToken) -> Result<Vec<Account>, LookupFailure> {
        if query.is_empty() {
            return Ok(Vec::new());
        }

        component_debug!(Component::Client, query = %query, "Issuing lookup");

        tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                component_debug!(Component::Client, query = %query, "Lookup cancelled");
                Ok(Vec::new())
            }
            result = self.fetch(query) => result,
        }
    }
}

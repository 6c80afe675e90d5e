//! Search configuration
//!
//! Defaults match the public GitHub API. Values can be overridden from the
//! environment (optionally via a `.env` file) and then from the command line.

use std::time::Duration;
use url::Url;

use crate::errors::{SharedError, SharedResult};

pub const DEFAULT_ENDPOINT: &str = "https://api.github.com/search/users";
pub const DEFAULT_DEBOUNCE_MS: u64 = 350;
pub const DEFAULT_USER_AGENT: &str = concat!("account-searcher/", env!("CARGO_PKG_VERSION"));
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// GitHub caps `per_page` for search endpoints at 100
pub const MAX_PER_PAGE: u32 = 100;

pub const ENV_ENDPOINT: &str = "GITHUB_SEARCH_ENDPOINT";
pub const ENV_TOKEN: &str = "GITHUB_TOKEN";
pub const ENV_DEBOUNCE_MS: &str = "SEARCH_DEBOUNCE_MS";
pub const ENV_PER_PAGE: &str = "SEARCH_PER_PAGE";

/// Runtime configuration for the lookup client and controller
#[derive(Debug, Clone, PartialEq)]
pub struct SearchConfig {
    pub endpoint: Url,
    pub debounce: Duration,
    pub per_page: Option<u32>,
    pub token: Option<String>,
    pub user_agent: String,
    pub request_timeout: Duration,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            endpoint: Url::parse(DEFAULT_ENDPOINT).expect("default endpoint is a valid URL"),
            debounce: Duration::from_millis(DEFAULT_DEBOUNCE_MS),
            per_page: None,
            token: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }
}

impl SearchConfig {
    /// Load configuration from the process environment, reading `.env` first if present
    pub fn from_env() -> SharedResult<Self> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup (used by `from_env` and tests)
    pub fn from_lookup<F>(lookup: F) -> SharedResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(endpoint) = lookup(ENV_ENDPOINT) {
            config = config.with_endpoint(&endpoint)?;
        }

        config.token = lookup(ENV_TOKEN).filter(|token| !token.trim().is_empty());

        if let Some(raw) = lookup(ENV_DEBOUNCE_MS) {
            let millis = raw.trim().parse::<u64>().map_err(|_| SharedError::InvalidConfig {
                field: ENV_DEBOUNCE_MS.to_string(),
                value: raw.clone(),
            })?;
            config.debounce = Duration::from_millis(millis);
        }

        if let Some(raw) = lookup(ENV_PER_PAGE) {
            let per_page = raw.trim().parse::<u32>().map_err(|_| SharedError::InvalidConfig {
                field: ENV_PER_PAGE.to_string(),
                value: raw.clone(),
            })?;
            config = config.with_per_page(per_page)?;
        }

        Ok(config)
    }

    /// Replace the endpoint, validating that it is an http(s) URL
    pub fn with_endpoint(mut self, endpoint: &str) -> SharedResult<Self> {
        let url = Url::parse(endpoint).map_err(|_| SharedError::InvalidEndpoint {
            input: endpoint.to_string(),
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(SharedError::InvalidEndpoint {
                input: endpoint.to_string(),
            });
        }

        self.endpoint = url;
        Ok(self)
    }

    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    pub fn with_per_page(mut self, per_page: u32) -> SharedResult<Self> {
        if per_page == 0 || per_page > MAX_PER_PAGE {
            return Err(SharedError::InvalidConfig {
                field: "per_page".to_string(),
                value: per_page.to_string(),
            });
        }
        self.per_page = Some(per_page);
        Ok(self)
    }

    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = SearchConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.endpoint.as_str(), DEFAULT_ENDPOINT);
        assert_eq!(config.debounce, Duration::from_millis(350));
        assert_eq!(config.per_page, None);
        assert_eq!(config.token, None);
        assert!(config.user_agent.starts_with("account-searcher/"));
    }

    #[test]
    fn test_environment_overrides() {
        let config = SearchConfig::from_lookup(lookup_from(&[
            (ENV_ENDPOINT, "http://127.0.0.1:9000/search/users"),
            (ENV_TOKEN, "ghp_example"),
            (ENV_DEBOUNCE_MS, "120"),
            (ENV_PER_PAGE, "50"),
        ]))
        .unwrap();

        assert_eq!(config.endpoint.as_str(), "http://127.0.0.1:9000/search/users");
        assert_eq!(config.token.as_deref(), Some("ghp_example"));
        assert_eq!(config.debounce, Duration::from_millis(120));
        assert_eq!(config.per_page, Some(50));
    }

    #[test]
    fn test_blank_token_is_ignored() {
        let config = SearchConfig::from_lookup(lookup_from(&[(ENV_TOKEN, "   ")])).unwrap();
        assert_eq!(config.token, None);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let result = SearchConfig::from_lookup(lookup_from(&[(ENV_DEBOUNCE_MS, "soon")]));
        assert!(matches!(result, Err(SharedError::InvalidConfig { .. })));

        let result = SearchConfig::from_lookup(lookup_from(&[(ENV_PER_PAGE, "500")]));
        assert!(matches!(result, Err(SharedError::InvalidConfig { .. })));

        let result = SearchConfig::from_lookup(lookup_from(&[(ENV_ENDPOINT, "not a url")]));
        assert!(matches!(result, Err(SharedError::InvalidEndpoint { .. })));

        let result = SearchConfig::default().with_endpoint("ftp://example.com/search");
        assert!(matches!(result, Err(SharedError::InvalidEndpoint { .. })));
    }
}

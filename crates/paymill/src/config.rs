//! # Paymill Configuration
//!
//! Configuration for the Paymill client.
//! The private API key can be passed directly or loaded from the environment.

use paymill_core::{PaymillError, PaymillResult, DEFAULT_API_VERSION};
use std::env;
use std::time::Duration;

pub const DEFAULT_API_BASE_URL: &str = "https://api.paymill.com";

/// Paymill API configuration
#[derive(Clone)]
pub struct PaymillConfig {
    /// Private API key
    pub api_key: String,

    /// API version prefix of every path, e.g. `v2.1`
    pub api_version: String,

    /// API base URL (for testing/mocking)
    pub api_base_url: String,

    /// Whole-request timeout; none unless the caller sets one
    pub timeout: Option<Duration>,
}

impl PaymillConfig {
    /// Create config for an API key with default version and host
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_version: DEFAULT_API_VERSION.to_string(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout: None,
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Required env vars:
    /// - `PAYMILL_API_KEY`
    ///
    /// Optional:
    /// - `PAYMILL_API_VERSION` (default `v2.1`)
    /// - `PAYMILL_API_BASE_URL` (default `https://api.paymill.com`)
    pub fn from_env() -> PaymillResult<Self> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Same rules as `from_env`, reading variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> PaymillResult<Self> {
        let api_key = lookup("PAYMILL_API_KEY")
            .ok_or_else(|| PaymillError::Configuration("PAYMILL_API_KEY not set".to_string()))?;

        if api_key.trim().is_empty() {
            return Err(PaymillError::Configuration(
                "PAYMILL_API_KEY is empty".to_string(),
            ));
        }

        let mut config = Self::new(api_key);
        if let Some(version) = lookup("PAYMILL_API_VERSION") {
            config.api_version = version;
        }
        if let Some(url) = lookup("PAYMILL_API_BASE_URL") {
            config = config.with_api_base_url(url);
        }
        Ok(config)
    }

    /// Builder: use another API version
    pub fn with_api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = version.into();
        self
    }

    /// Builder: set custom API base URL (for testing)
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Builder: bound every request by `timeout`
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Absolute URL for a prepared request path
    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.api_base_url, path)
    }
}

impl std::fmt::Debug for PaymillConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PaymillConfig")
            .field("api_key", &"<redacted>")
            .field("api_version", &self.api_version)
            .field("api_base_url", &self.api_base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = PaymillConfig::new("abc");
        assert_eq!(config.api_version, "v2.1");
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert!(config.timeout.is_none());
    }

    #[test]
    fn test_builders() {
        let config = PaymillConfig::new("abc")
            .with_api_version("v2")
            .with_api_base_url("http://127.0.0.1:8080/")
            .with_timeout(Duration::from_secs(5));

        assert_eq!(config.api_version, "v2");
        assert_eq!(config.url_for("/v2/clients"), "http://127.0.0.1:8080/v2/clients");
        assert_eq!(config.timeout, Some(Duration::from_secs(5)));
    }

    #[test]
    fn test_debug_hides_key() {
        let printed = format!("{:?}", PaymillConfig::new("super-secret"));
        assert!(!printed.contains("super-secret"));
    }

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn test_missing_or_empty_key() {
        let result = PaymillConfig::from_lookup(vars(&[]));
        assert!(matches!(result, Err(PaymillError::Configuration(_))));

        let result = PaymillConfig::from_lookup(vars(&[("PAYMILL_API_KEY", "  ")]));
        assert!(matches!(result, Err(PaymillError::Configuration(_))));
    }

    #[test]
    fn test_lookup_overrides() {
        let config = PaymillConfig::from_lookup(vars(&[
            ("PAYMILL_API_KEY", "abc"),
            ("PAYMILL_API_VERSION", "v2"),
            ("PAYMILL_API_BASE_URL", "http://localhost:9000/"),
        ]))
        .unwrap();

        assert_eq!(config.api_key, "abc");
        assert_eq!(config.api_version, "v2");
        assert_eq!(config.url_for("/v2/clients"), "http://localhost:9000/v2/clients");
    }
}

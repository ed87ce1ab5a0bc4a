//! Configuration types for the search client.

use std::env;
use std::time::Duration;

/// Default service URL.
pub const DEFAULT_HOST: &str = "http://localhost:7700";

/// Configuration for the [`Client`](crate::Client).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the service, e.g. `http://localhost:7700`.
    pub host: String,
    /// Key sent with every request, if the service requires one.
    pub api_key: Option<String>,
    /// Per-request timeout. `None` leaves requests unbounded.
    pub timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_HOST)
    }
}

impl ClientConfig {
    /// Create a config for the given host with no key and no timeout.
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            api_key: None,
            timeout: None,
        }
    }

    /// Set the API key.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build a config from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `MEILI_HOST`: service URL (default: http://localhost:7700)
    /// - `MEILI_API_KEY`: API key (default: none)
    /// - `MEILI_TIMEOUT_SECS`: request timeout in seconds (default: none)
    ///
    /// An unparsable `MEILI_TIMEOUT_SECS` is ignored.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let host = lookup("MEILI_HOST")
            .filter(|host| !host.is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());
        let api_key = lookup("MEILI_API_KEY").filter(|key| !key.is_empty());
        let timeout = lookup("MEILI_TIMEOUT_SECS")
            .and_then(|secs| secs.parse::<u64>().ok())
            .map(Duration::from_secs);

        Self {
            host,
            api_key,
            timeout,
        }
    }
}

//! Client initialization for the CLI.

use std::time::Duration;

use meili_client::{Client, ClientConfig};
use tracing::info;

use crate::cli::ConnectionArgs;
use crate::CliError;

/// Container for the initialized client.
pub struct Dependencies {
    /// Client connected to the configured host.
    pub client: Client,
}

impl Dependencies {
    /// Initialize the client from connection flags.
    ///
    /// Flags are already merged with `MEILI_HOST`, `MEILI_API_KEY` and
    /// `MEILI_TIMEOUT_SECS` by the argument parser; unset values fall back to
    /// the client defaults.
    ///
    /// # Returns
    ///
    /// * `Ok(Dependencies)` - Initialized dependencies
    /// * `Err(CliError)` - If the host is not a valid URL
    pub fn new(args: &ConnectionArgs) -> Result<Self, CliError> {
        let config = Self::client_config(args);

        info!(
            host = %config.host,
            authenticated = config.api_key.is_some(),
            "Initializing client"
        );

        let client = Client::new(config)
            .map_err(|e| CliError::config(format!("Failed to create client: {}", e)))?;

        Ok(Self { client })
    }

    fn client_config(args: &ConnectionArgs) -> ClientConfig {
        let mut config = match args.host.as_deref().filter(|host| !host.is_empty()) {
            Some(host) => ClientConfig::new(host),
            None => ClientConfig::default(),
        };
        if let Some(api_key) = args.api_key.as_deref().filter(|key| !key.is_empty()) {
            config = config.with_api_key(api_key);
        }
        if let Some(secs) = args.timeout_secs {
            config = config.with_timeout(Duration::from_secs(secs));
        }
        config
    }
}

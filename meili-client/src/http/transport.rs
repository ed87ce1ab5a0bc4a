//! reqwest-backed transport.
//!
//! This module provides the production implementation of `Transport`.

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, info, instrument, warn};
use url::Url;

use crate::config::ClientConfig;
use crate::errors::ClientError;
use crate::interfaces::{HttpRequest, HttpResponse, Method, Transport};

/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "X-Meili-API-Key";

/// HTTP transport to a single service node.
///
/// Holds one pooled `reqwest::Client`, so clones of the owning
/// [`Client`](crate::Client) share connections.
///
/// # Example
///
/// ```ignore
/// let config = ClientConfig::new("http://localhost:7700").with_api_key("masterKey");
/// let transport = HttpTransport::new(&config)?;
/// let response = transport.send(HttpRequest::get("/version")).await?;
/// ```
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    base_url: Url,
    api_key: Option<String>,
}

impl HttpTransport {
    /// Create a transport for the configured host.
    ///
    /// # Returns
    ///
    /// * `Ok(HttpTransport)` - A new transport instance
    /// * `Err(ClientError::ConfigError)` - If the host is not a valid base URL
    ///   or the HTTP client cannot be built
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let base_url = Url::parse(&config.host).map_err(|e| {
            ClientError::configuration(format!("Invalid host {}: {}", config.host, e))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::configuration(format!(
                "Host {} cannot be used as a base URL",
                config.host
            )));
        }

        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| {
            ClientError::configuration(format!("Failed to create HTTP client: {}", e))
        })?;

        info!(
            host = %base_url,
            authenticated = config.api_key.is_some(),
            timeout_secs = config.timeout.map(|t| t.as_secs()),
            "Created HTTP transport"
        );

        Ok(Self {
            client,
            base_url,
            api_key: config.api_key.clone(),
        })
    }

    /// Resolve a request path and query against the base URL.
    ///
    /// A path prefix on the base URL (e.g. behind a reverse proxy) is kept.
    fn url_for(&self, request: &HttpRequest) -> Url {
        let mut url = self.base_url.clone();
        let base_path = url.path().trim_end_matches('/').to_string();
        url.set_path(&format!("{}{}", base_path, request.path));

        if !request.query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in &request.query {
                pairs.append_pair(key, value);
            }
        }
        url
    }

    fn reqwest_method(method: Method) -> reqwest::Method {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Patch => reqwest::Method::PATCH,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    #[instrument(skip(self, request), fields(method = %request.method, path = %request.path))]
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ClientError> {
        let url = self.url_for(&request);

        let mut builder = self
            .client
            .request(Self::reqwest_method(request.method), url);
        if let Some(ref api_key) = self.api_key {
            builder = builder.header(API_KEY_HEADER, api_key);
        }
        if let Some(ref body) = request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|e| {
            let error_kind = if e.is_timeout() {
                "timeout"
            } else if e.is_connect() {
                "connection"
            } else if e.is_request() {
                "request build"
            } else {
                "unknown"
            };
            warn!(error_kind, error = %e, "Request failed");
            ClientError::transport(format!("Request failed ({}): {}", error_kind, e))
        })?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| {
            ClientError::transport(format!("Failed to read response body: {}", e))
        })?;

        debug!(status, bytes = body.len(), "Received response");
        Ok(HttpResponse::new(status, body))
    }
}

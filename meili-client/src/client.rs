//! Search client implementation.
//!
//! This module provides the root client. Application code uses it to reach
//! one handle per resource category; every handle shares the same transport.

use std::fmt;
use std::sync::Arc;

use serde::de::{DeserializeOwned, IgnoredAny};
use serde_json::Value;
use tracing::debug;

use crate::config::ClientConfig;
use crate::errors::ClientError;
use crate::http::HttpTransport;
use crate::interfaces::{HttpRequest, HttpResponse, Transport};
use crate::resources::{
    DocumentsApi, HealthApi, IndexesApi, KeysApi, SearchApi, SettingsApi, StatsApi, StopWordsApi,
    SynonymsApi, SystemInfoApi, UpdatesApi, VersionApi,
};

/// The main client for the search service.
///
/// Cloning is cheap and clones share the underlying transport.
///
/// # Example
///
/// ```ignore
/// let client = Client::new(ClientConfig::new("http://localhost:7700"))?;
/// let created = client
///     .indexes()
///     .create(&CreateIndexRequest::new().with_uid("movies"))
///     .await?;
/// let handle = client.documents(&created.uid).add_or_update(&movies).await?;
/// client
///     .updates(&created.uid)
///     .wait_for(handle, Duration::from_millis(50), Duration::from_secs(5))
///     .await?;
/// ```
#[derive(Clone)]
pub struct Client {
    transport: Arc<dyn Transport>,
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client").finish_non_exhaustive()
    }
}

impl Client {
    /// Create a client backed by the HTTP transport.
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let transport = HttpTransport::new(&config)?;
        Ok(Self::with_transport(Arc::new(transport)))
    }

    /// Create a client configured from `MEILI_*` environment variables.
    pub fn from_env() -> Result<Self, ClientError> {
        Self::new(ClientConfig::from_env())
    }

    /// Create a client on top of any transport.
    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    pub fn indexes(&self) -> IndexesApi<'_> {
        IndexesApi::new(self)
    }

    pub fn documents(&self, index_uid: impl Into<String>) -> DocumentsApi<'_> {
        DocumentsApi::new(self, index_uid.into())
    }

    pub fn search(&self, index_uid: impl Into<String>) -> SearchApi<'_> {
        SearchApi::new(self, index_uid.into())
    }

    pub fn synonyms(&self, index_uid: impl Into<String>) -> SynonymsApi<'_> {
        SynonymsApi::new(self, index_uid.into())
    }

    pub fn stop_words(&self, index_uid: impl Into<String>) -> StopWordsApi<'_> {
        StopWordsApi::new(self, index_uid.into())
    }

    pub fn updates(&self, index_uid: impl Into<String>) -> UpdatesApi<'_> {
        UpdatesApi::new(self, index_uid.into())
    }

    pub fn settings(&self, index_uid: impl Into<String>) -> SettingsApi<'_> {
        SettingsApi::new(self, index_uid.into())
    }

    pub fn keys(&self) -> KeysApi<'_> {
        KeysApi::new(self)
    }

    pub fn stats(&self) -> StatsApi<'_> {
        StatsApi::new(self)
    }

    pub fn health(&self) -> HealthApi<'_> {
        HealthApi::new(self)
    }

    pub fn version(&self) -> VersionApi<'_> {
        VersionApi::new(self)
    }

    pub fn system_info(&self) -> SystemInfoApi<'_> {
        SystemInfoApi::new(self)
    }

    /// Send a request and decode a successful response as `T`.
    ///
    /// An empty success body decodes as JSON `null`, so `T = ()` accepts
    /// `204 No Content`.
    pub(crate) async fn execute<T: DeserializeOwned>(
        &self,
        request: HttpRequest,
    ) -> Result<T, ClientError> {
        let method = request.method;
        let path = request.path.clone();

        let response = self.transport.send(request).await?;
        debug!(%method, path = %path, status = response.status, "Request completed");

        if !response.is_success() {
            return Err(error_from_response(&response));
        }

        let body = response.body.trim();
        let body = if body.is_empty() { "null" } else { body };
        serde_json::from_str(body).map_err(|e| {
            ClientError::decode(format!("Unexpected response for {} {}: {}", method, path, e))
        })
    }

    /// Send a request whose success body carries nothing the caller needs.
    ///
    /// Any JSON body, or none, is accepted once the status is a success.
    pub(crate) async fn execute_unit(&self, request: HttpRequest) -> Result<(), ClientError> {
        self.execute::<IgnoredAny>(request).await?;
        Ok(())
    }
}

/// Build the error for a non-success response, preferring the service's
/// `message` field over the raw body.
fn error_from_response(response: &HttpResponse) -> ClientError {
    let message = serde_json::from_str::<Value>(&response.body)
        .ok()
        .and_then(|body| {
            body.get("message")
                .and_then(Value::as_str)
                .map(str::to_string)
        })
        .unwrap_or_else(|| {
            if response.body.trim().is_empty() {
                format!("status {}", response.status)
            } else {
                response.body.clone()
            }
        });
    ClientError::from_status(response.status, message)
}

/// Percent-encode a caller-supplied value for use as one path segment.
pub(crate) fn segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

/// Reject an empty identifier before any request is sent.
pub(crate) fn require_non_empty(field: &str, value: &str) -> Result<(), ClientError> {
    if value.trim().is_empty() {
        return Err(ClientError::validation(format!("{} is required", field)));
    }
    Ok(())
}

/// Serialize a request body.
pub(crate) fn to_body<T: serde::Serialize + ?Sized>(value: &T) -> Result<Value, ClientError> {
    serde_json::to_value(value)
        .map_err(|e| ClientError::validation(format!("Failed to serialize request body: {}", e)))
}

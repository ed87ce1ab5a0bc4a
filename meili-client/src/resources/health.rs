//! Health operations.

use serde_json::json;
use tracing::info;

use crate::client::Client;
use crate::errors::ClientError;
use crate::interfaces::HttpRequest;

/// Handle on the health flag of the service.
#[derive(Debug, Clone, Copy)]
pub struct HealthApi<'a> {
    client: &'a Client,
}

impl<'a> HealthApi<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Succeeds when the service reports itself healthy.
    pub async fn get(&self) -> Result<(), ClientError> {
        self.client.execute_unit(HttpRequest::get("/health")).await
    }

    /// Check if the service is healthy and reachable.
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - If the service is healthy
    /// * `Ok(false)` - If the service answered but reported itself unhealthy
    /// * `Err(ClientError)` - If the check could not be performed
    pub async fn is_healthy(&self) -> Result<bool, ClientError> {
        match self.get().await {
            Ok(()) => Ok(true),
            Err(ClientError::ApiError { status: 503, .. }) => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// Mark the service healthy or unhealthy, e.g. to drain it behind a load balancer.
    pub async fn set(&self, healthy: bool) -> Result<(), ClientError> {
        let body = json!({ "health": healthy });
        self.client
            .execute_unit(HttpRequest::put("/health").with_body(body))
            .await?;
        info!(healthy, "Updated health flag");
        Ok(())
    }
}

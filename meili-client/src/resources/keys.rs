//! API key operations.

use tracing::info;

use crate::client::{require_non_empty, segment, to_body, Client};
use crate::errors::ClientError;
use crate::interfaces::HttpRequest;
use meili_client_shared::{ApiKey, CreateApiKeyRequest, UpdateApiKeyRequest};

/// Handle on the API keys of the service.
#[derive(Debug, Clone, Copy)]
pub struct KeysApi<'a> {
    client: &'a Client,
}

impl<'a> KeysApi<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    fn key_path(key: &str) -> Result<String, ClientError> {
        require_non_empty("key", key)?;
        Ok(format!("/keys/{}", segment(key)))
    }

    pub async fn get(&self, key: &str) -> Result<ApiKey, ClientError> {
        let path = Self::key_path(key)?;
        self.client.execute(HttpRequest::get(path)).await
    }

    pub async fn list(&self) -> Result<Vec<ApiKey>, ClientError> {
        self.client.execute(HttpRequest::get("/keys")).await
    }

    /// Create a key. The generated key value is in the response.
    pub async fn create(&self, request: &CreateApiKeyRequest) -> Result<ApiKey, ClientError> {
        let key: ApiKey = self
            .client
            .execute(HttpRequest::post("/keys").with_body(to_body(request)?))
            .await?;
        info!(description = %key.description, "Created API key");
        Ok(key)
    }

    /// Update the key named by `request.key`.
    pub async fn update(&self, request: &UpdateApiKeyRequest) -> Result<ApiKey, ClientError> {
        let path = Self::key_path(&request.key)?;
        if !request.has_updates() {
            return Err(ClientError::validation("no fields to update"));
        }
        self.client
            .execute(HttpRequest::put(path).with_body(to_body(request)?))
            .await
    }

    pub async fn delete(&self, key: &str) -> Result<(), ClientError> {
        let path = Self::key_path(key)?;
        self.client.execute_unit(HttpRequest::delete(path)).await
    }
}

//! Host system information.

use crate::client::Client;
use crate::errors::ClientError;
use crate::interfaces::HttpRequest;
use meili_client_shared::{SystemInformation, SystemInformationPretty};

/// Handle on the resource usage reported by the service.
#[derive(Debug, Clone, Copy)]
pub struct SystemInfoApi<'a> {
    client: &'a Client,
}

impl<'a> SystemInfoApi<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub async fn get(&self) -> Result<SystemInformation, ClientError> {
        self.client.execute(HttpRequest::get("/sys-info")).await
    }

    /// Same figures, formatted for humans.
    pub async fn get_pretty(&self) -> Result<SystemInformationPretty, ClientError> {
        self.client.execute(HttpRequest::get("/sys-info/pretty")).await
    }
}

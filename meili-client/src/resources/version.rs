//! Version operation.

use crate::client::Client;
use crate::errors::ClientError;
use crate::interfaces::HttpRequest;
use meili_client_shared::Version;

/// Handle on the build information of the service.
#[derive(Debug, Clone, Copy)]
pub struct VersionApi<'a> {
    client: &'a Client,
}

impl<'a> VersionApi<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub async fn get(&self) -> Result<Version, ClientError> {
        self.client.execute(HttpRequest::get("/version")).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::MockTransport;
    use serde_json::json;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_get() {
        let mock = Arc::new(MockTransport::new().respond(
            200,
            json!({
                "commitSha": "b46889b5f0f2f8b91438a08a358ba8f05fc09fc1",
                "buildDate": "2019-11-15T09:51:54.278247+00:00",
                "pkgVersion": "0.8.4"
            }),
        ));
        let client = Client::with_transport(mock);

        let version = client.version().get().await.unwrap();

        assert_eq!(version.pkg_version, "0.8.4");
    }
}

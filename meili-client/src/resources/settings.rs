//! Settings operations.

use crate::client::{require_non_empty, segment, to_body, Client};
use crate::errors::ClientError;
use crate::interfaces::HttpRequest;
use meili_client_shared::{Settings, UpdateIdResponse};

/// Handle on the settings of one index.
#[derive(Debug, Clone)]
pub struct SettingsApi<'a> {
    client: &'a Client,
    index_uid: String,
}

impl<'a> SettingsApi<'a> {
    pub(crate) fn new(client: &'a Client, index_uid: String) -> Self {
        Self { client, index_uid }
    }

    fn settings_path(&self) -> Result<String, ClientError> {
        require_non_empty("index uid", &self.index_uid)?;
        Ok(format!("/indexes/{}/settings", segment(&self.index_uid)))
    }

    pub async fn get(&self) -> Result<Settings, ClientError> {
        let path = self.settings_path()?;
        self.client.execute(HttpRequest::get(path)).await
    }

    /// Replace the settings as a whole. Applied asynchronously.
    pub async fn add_or_update(
        &self,
        settings: &Settings,
    ) -> Result<UpdateIdResponse, ClientError> {
        let path = self.settings_path()?;
        self.client
            .execute(HttpRequest::post(path).with_body(to_body(settings)?))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::MockTransport;
    use serde_json::json;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_get_and_replace() {
        let mock = Arc::new(
            MockTransport::new()
                .respond(200, json!({ "distinctField": "movie_id" }))
                .respond(202, json!({ "updateId": 6 })),
        );
        let client = Client::with_transport(mock.clone());

        let mut settings = client.settings("movies").get().await.unwrap();
        assert_eq!(settings.distinct_field.as_deref(), Some("movie_id"));
        assert!(settings.ranking_order.is_none());

        settings.ranking_order = Some(vec![
            "_sum_of_typos".to_string(),
            "release_date".to_string(),
        ]);
        let handle = client.settings("movies").add_or_update(&settings).await.unwrap();

        assert_eq!(handle, UpdateIdResponse::new(6));
        let request = mock.last_request().await;
        assert_eq!(request.path, "/indexes/movies/settings");
        assert_eq!(
            request.body,
            Some(json!({
                "rankingOrder": ["_sum_of_typos", "release_date"],
                "distinctField": "movie_id"
            }))
        );
    }
}

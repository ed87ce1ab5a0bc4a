//! Index operations.

use tracing::info;

use crate::client::{require_non_empty, segment, to_body, Client};
use crate::errors::ClientError;
use crate::interfaces::HttpRequest;
use meili_client_shared::{
    CreateIndexRequest, CreateIndexResponse, Index, RawSchema, Schema, UpdateIdResponse,
    UpdateIndexRequest,
};

fn raw_flag() -> Vec<(String, String)> {
    vec![("raw".to_string(), "true".to_string())]
}

/// Handle on the indexes of the service.
#[derive(Debug, Clone, Copy)]
pub struct IndexesApi<'a> {
    client: &'a Client,
}

impl<'a> IndexesApi<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    fn index_path(uid: &str) -> Result<String, ClientError> {
        require_non_empty("index uid", uid)?;
        Ok(format!("/indexes/{}", segment(uid)))
    }

    /// Fetch one index.
    ///
    /// # Returns
    ///
    /// * `Ok(Index)` - The index
    /// * `Err(ClientError::NotFound)` - If no index has this uid
    pub async fn get(&self, uid: &str) -> Result<Index, ClientError> {
        let path = Self::index_path(uid)?;
        self.client.execute(HttpRequest::get(path)).await
    }

    /// List every index. An instance without indexes yields an empty list.
    pub async fn list(&self) -> Result<Vec<Index>, ClientError> {
        self.client.execute(HttpRequest::get("/indexes")).await
    }

    /// Create an index.
    ///
    /// When `request.uid` is `None` the service generates the uid and
    /// returns it in the response.
    ///
    /// # Returns
    ///
    /// * `Ok(CreateIndexResponse)` - The created index
    /// * `Err(ClientError::ValidationError)` - If the uid is taken or the payload is rejected
    pub async fn create(
        &self,
        request: &CreateIndexRequest,
    ) -> Result<CreateIndexResponse, ClientError> {
        if let Some(ref uid) = request.uid {
            require_non_empty("index uid", uid)?;
        }

        let response: CreateIndexResponse = self
            .client
            .execute(HttpRequest::post("/indexes").with_body(to_body(request)?))
            .await?;

        info!(uid = %response.uid, "Created index");
        Ok(response)
    }

    /// Rename an index.
    pub async fn update(&self, uid: &str, name: &str) -> Result<Index, ClientError> {
        let path = Self::index_path(uid)?;
        let body = to_body(&UpdateIndexRequest {
            name: name.to_string(),
        })?;
        self.client
            .execute(HttpRequest::put(path).with_body(body))
            .await
    }

    /// Delete an index and all its documents.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - If the index was deleted
    /// * `Err(ClientError::NotFound)` - If no index has this uid
    pub async fn delete(&self, uid: &str) -> Result<(), ClientError> {
        let path = Self::index_path(uid)?;
        self.client.execute_unit(HttpRequest::delete(path)).await?;
        info!(uid = %uid, "Deleted index");
        Ok(())
    }

    /// Fetch the schema in its raw form.
    pub async fn get_raw_schema(&self, uid: &str) -> Result<RawSchema, ClientError> {
        let path = format!("{}/schema", Self::index_path(uid)?);
        self.client
            .execute(HttpRequest::get(path).with_query(raw_flag()))
            .await
    }

    /// Fetch the schema.
    pub async fn get_schema(&self, uid: &str) -> Result<Schema, ClientError> {
        let path = format!("{}/schema", Self::index_path(uid)?);
        self.client.execute(HttpRequest::get(path)).await
    }

    /// Replace the schema. Applied asynchronously.
    pub async fn update_schema(
        &self,
        uid: &str,
        schema: &Schema,
    ) -> Result<UpdateIdResponse, ClientError> {
        let path = format!("{}/schema", Self::index_path(uid)?);
        self.client
            .execute(HttpRequest::put(path).with_body(to_body(schema)?))
            .await
    }

    /// Replace the schema using its raw form. Applied asynchronously.
    pub async fn update_with_raw_schema(
        &self,
        uid: &str,
        schema: &RawSchema,
    ) -> Result<UpdateIdResponse, ClientError> {
        require_non_empty("schema identifier", &schema.identifier)?;
        let path = format!("{}/schema", Self::index_path(uid)?);
        self.client
            .execute(
                HttpRequest::put(path)
                    .with_query(raw_flag())
                    .with_body(to_body(schema)?),
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interfaces::Method;
    use crate::test_support::{InMemoryEngine, MockTransport};
    use meili_client_shared::{RawAttribute, SchemaAttribute};
    use serde_json::json;
    use std::collections::BTreeMap;
    use std::sync::Arc;

    fn engine_client() -> Client {
        Client::with_transport(Arc::new(InMemoryEngine::new()))
    }

    #[tokio::test]
    async fn test_create_then_get() {
        let client = engine_client();

        let created = client
            .indexes()
            .create(&CreateIndexRequest::new().with_uid("movies").with_name("Movies"))
            .await
            .unwrap();
        let index = client.indexes().get(&created.uid).await.unwrap();

        assert_eq!(created.uid, "movies");
        assert_eq!(index.uid, created.uid);
        assert_eq!(index.name, "Movies");
    }

    #[tokio::test]
    async fn test_create_without_uid_generates_one() {
        let client = engine_client();

        let created = client
            .indexes()
            .create(&CreateIndexRequest::new())
            .await
            .unwrap();

        assert!(!created.uid.is_empty());
        let index = client.indexes().get(&created.uid).await.unwrap();
        assert_eq!(index.uid, created.uid);
    }

    #[tokio::test]
    async fn test_duplicate_uid_is_validation_error() {
        let client = engine_client();
        let request = CreateIndexRequest::new().with_uid("movies");

        client.indexes().create(&request).await.unwrap();
        let result = client.indexes().create(&request).await;

        assert!(matches!(result, Err(ClientError::ValidationError(_))));
    }

    #[tokio::test]
    async fn test_delete_then_get_is_not_found() {
        let client = engine_client();
        client
            .indexes()
            .create(&CreateIndexRequest::new().with_uid("movies"))
            .await
            .unwrap();

        client.indexes().delete("movies").await.unwrap();

        assert!(client.indexes().get("movies").await.unwrap_err().is_not_found());
        assert!(client.indexes().delete("movies").await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_list_empty() {
        let client = engine_client();

        let indexes = client.indexes().list().await.unwrap();

        assert!(indexes.is_empty());
    }

    #[tokio::test]
    async fn test_update_renames() {
        let client = engine_client();
        client
            .indexes()
            .create(&CreateIndexRequest::new().with_uid("movies"))
            .await
            .unwrap();

        let index = client.indexes().update("movies", "Films").await.unwrap();

        assert_eq!(index.name, "Films");
        assert_eq!(client.indexes().list().await.unwrap()[0].name, "Films");
    }

    #[tokio::test]
    async fn test_empty_uid_rejected_locally() {
        let mock = Arc::new(MockTransport::new());
        let client = Client::with_transport(mock.clone());

        let result = client.indexes().get("").await;

        assert!(matches!(result, Err(ClientError::ValidationError(_))));
        assert!(mock.requests().await.is_empty());
    }

    #[tokio::test]
    async fn test_raw_schema_request() {
        let mock = Arc::new(MockTransport::new().respond(
            200,
            json!({
                "identifier": "id",
                "attributes": { "id": { "displayed": true, "indexed": true } }
            }),
        ));
        let client = Client::with_transport(mock.clone());

        let schema = client.indexes().get_raw_schema("movies").await.unwrap();

        assert_eq!(schema.identifier, "id");
        let request = mock.last_request().await;
        assert_eq!(request.path, "/indexes/movies/schema");
        assert_eq!(request.query, raw_flag());
    }

    #[tokio::test]
    async fn test_update_schema_returns_handle() {
        let mock = Arc::new(MockTransport::new().respond(202, json!({ "updateId": 12 })));
        let client = Client::with_transport(mock.clone());
        let schema = Schema::new().with_attribute(
            "id",
            [SchemaAttribute::Identifier, SchemaAttribute::Displayed],
        );

        let handle = client
            .indexes()
            .update_schema("movies", &schema)
            .await
            .unwrap();

        assert_eq!(handle, UpdateIdResponse::new(12));
        let request = mock.last_request().await;
        assert_eq!(request.method, Method::Put);
        assert_eq!(request.body, Some(json!({ "id": ["identifier", "displayed"] })));
        assert!(request.query.is_empty());
    }

    #[tokio::test]
    async fn test_delete_accepts_json_body() {
        let mock = Arc::new(MockTransport::new().respond(202, json!({ "updateId": 3 })));
        let client = Client::with_transport(mock.clone());

        client.indexes().delete("movies").await.unwrap();

        let request = mock.last_request().await;
        assert_eq!(request.method, Method::Delete);
        assert_eq!(request.path, "/indexes/movies");
    }

    #[tokio::test]
    async fn test_get_schema_request() {
        let mock = Arc::new(MockTransport::new().respond(
            200,
            json!({ "id": ["identifier", "displayed"], "title": ["indexed"] }),
        ));
        let client = Client::with_transport(mock.clone());

        let schema = client.indexes().get_schema("movies").await.unwrap();

        assert_eq!(schema.identifier(), Some("id"));
        let request = mock.last_request().await;
        assert_eq!(request.method, Method::Get);
        assert_eq!(request.path, "/indexes/movies/schema");
        assert!(request.query.is_empty());
    }

    #[tokio::test]
    async fn test_raw_schema_without_identifier_rejected_locally() {
        let mock = Arc::new(MockTransport::new());
        let client = Client::with_transport(mock.clone());
        let schema = RawSchema {
            identifier: String::new(),
            attributes: BTreeMap::from([(
                "title".to_string(),
                RawAttribute {
                    indexed: true,
                    displayed: true,
                    ranked: false,
                },
            )]),
        };

        let result = client
            .indexes()
            .update_with_raw_schema("movies", &schema)
            .await;

        assert!(matches!(result, Err(ClientError::ValidationError(_))));
        assert!(mock.requests().await.is_empty());
    }

    #[tokio::test]
    async fn test_uid_is_path_encoded() {
        let mock = Arc::new(MockTransport::new().respond_raw(204, ""));
        let client = Client::with_transport(mock.clone());

        client.indexes().delete("my index").await.unwrap();

        assert_eq!(mock.last_request().await.path, "/indexes/my%20index");
    }
}

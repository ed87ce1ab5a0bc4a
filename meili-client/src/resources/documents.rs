//! Document operations.
//!
//! Documents are caller-defined types. Reads are generic over the expected
//! shape and fail with `ClientError::DecodeError` when the stored document does
//! not fit it; writes accept anything serializable.

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::client::{require_non_empty, segment, to_body, Client};
use crate::errors::ClientError;
use crate::interfaces::HttpRequest;
use meili_client_shared::{ListDocumentsRequest, UpdateIdResponse};

/// Handle on the documents of one index.
#[derive(Debug, Clone)]
pub struct DocumentsApi<'a> {
    client: &'a Client,
    index_uid: String,
}

impl<'a> DocumentsApi<'a> {
    pub(crate) fn new(client: &'a Client, index_uid: String) -> Self {
        Self { client, index_uid }
    }

    fn documents_path(&self) -> Result<String, ClientError> {
        require_non_empty("index uid", &self.index_uid)?;
        Ok(format!("/indexes/{}/documents", segment(&self.index_uid)))
    }

    fn document_path(&self, identifier: &str) -> Result<String, ClientError> {
        require_non_empty("document identifier", identifier)?;
        Ok(format!("{}/{}", self.documents_path()?, segment(identifier)))
    }

    /// Fetch one document by its unique identifier, decoded as `T`.
    ///
    /// # Returns
    ///
    /// * `Ok(T)` - The document
    /// * `Err(ClientError::NotFound)` - If no document has this identifier
    /// * `Err(ClientError::DecodeError)` - If the document does not fit `T`
    pub async fn get<T: DeserializeOwned>(&self, identifier: &str) -> Result<T, ClientError> {
        let path = self.document_path(identifier)?;
        self.client.execute(HttpRequest::get(path)).await
    }

    /// Delete one document.
    pub async fn delete(&self, identifier: &str) -> Result<UpdateIdResponse, ClientError> {
        let path = self.document_path(identifier)?;
        self.client.execute(HttpRequest::delete(path)).await
    }

    /// Delete a selection of documents by identifier.
    pub async fn deletes<S: AsRef<str>>(
        &self,
        identifiers: &[S],
    ) -> Result<UpdateIdResponse, ClientError> {
        if identifiers.is_empty() {
            return Err(ClientError::validation(
                "at least one document identifier is required",
            ));
        }
        let identifiers: Vec<&str> = identifiers.iter().map(|id| id.as_ref()).collect();
        for identifier in &identifiers {
            require_non_empty("document identifier", identifier)?;
        }

        let path = format!("{}/delete", self.documents_path()?);
        debug!(index = %self.index_uid, count = identifiers.len(), "Deleting documents");
        self.client
            .execute(HttpRequest::post(path).with_body(to_body(&identifiers)?))
            .await
    }

    /// List documents in no particular order, decoded as `T`.
    ///
    /// This route is not optimized on the service side and may be slow on
    /// large indexes.
    pub async fn list<T: DeserializeOwned>(
        &self,
        request: &ListDocumentsRequest,
    ) -> Result<Vec<T>, ClientError> {
        let path = self.documents_path()?;
        self.client
            .execute(HttpRequest::get(path).with_query(request.query_pairs()))
            .await
    }

    /// Add documents, replacing any existing document with the same identifier.
    ///
    /// Applying the same batch twice leaves the index in the same state.
    pub async fn add_or_update<T: Serialize>(
        &self,
        documents: &[T],
    ) -> Result<UpdateIdResponse, ClientError> {
        if documents.is_empty() {
            return Err(ClientError::validation("at least one document is required"));
        }

        let path = self.documents_path()?;
        let body = to_body(documents)?;
        debug!(index = %self.index_uid, count = documents.len(), "Adding documents");
        self.client
            .execute(HttpRequest::post(path).with_body(body))
            .await
    }

    /// Delete every document of the index.
    pub async fn clear_all(&self) -> Result<UpdateIdResponse, ClientError> {
        let path = self.documents_path()?;
        self.client.execute(HttpRequest::delete(path)).await
    }
}

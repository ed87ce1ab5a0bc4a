//! Synonym operations.

use std::collections::BTreeMap;

use crate::client::{require_non_empty, segment, to_body, Client};
use crate::errors::ClientError;
use crate::interfaces::HttpRequest;
use meili_client_shared::{BatchCreateSynonymsRequest, ListSynonymsResponse, UpdateIdResponse};

/// Handle on the synonyms of one index.
#[derive(Debug, Clone)]
pub struct SynonymsApi<'a> {
    client: &'a Client,
    index_uid: String,
}

impl<'a> SynonymsApi<'a> {
    pub(crate) fn new(client: &'a Client, index_uid: String) -> Self {
        Self { client, index_uid }
    }

    fn synonyms_path(&self) -> Result<String, ClientError> {
        require_non_empty("index uid", &self.index_uid)?;
        Ok(format!("/indexes/{}/synonyms", segment(&self.index_uid)))
    }

    fn word_path(&self, word: &str) -> Result<String, ClientError> {
        require_non_empty("word", word)?;
        Ok(format!("{}/{}", self.synonyms_path()?, segment(word)))
    }

    /// Synonyms of one word.
    pub async fn list(&self, word: &str) -> Result<Vec<String>, ClientError> {
        let path = self.word_path(word)?;
        self.client.execute(HttpRequest::get(path)).await
    }

    /// Every synonym group of the index.
    pub async fn list_all(&self) -> Result<Vec<ListSynonymsResponse>, ClientError> {
        let path = self.synonyms_path()?;
        self.client.execute(HttpRequest::get(path)).await
    }

    /// Create a synonym group for `word`.
    pub async fn create(
        &self,
        word: &str,
        synonyms: &[String],
    ) -> Result<UpdateIdResponse, ClientError> {
        require_non_empty("word", word)?;
        let path = self.synonyms_path()?;
        let body = BTreeMap::from([(word.to_string(), synonyms.to_vec())]);
        self.client
            .execute(HttpRequest::post(path).with_body(to_body(&body)?))
            .await
    }

    /// Replace the synonyms of `word`.
    pub async fn update(
        &self,
        word: &str,
        synonyms: &[String],
    ) -> Result<UpdateIdResponse, ClientError> {
        let path = self.word_path(word)?;
        self.client
            .execute(HttpRequest::put(path).with_body(to_body(synonyms)?))
            .await
    }

    /// Delete the synonym group of `word`.
    pub async fn delete(&self, word: &str) -> Result<UpdateIdResponse, ClientError> {
        let path = self.word_path(word)?;
        self.client.execute(HttpRequest::delete(path)).await
    }

    /// Create several synonym groups at once.
    pub async fn batch_create(
        &self,
        request: &BatchCreateSynonymsRequest,
    ) -> Result<UpdateIdResponse, ClientError> {
        if request.is_empty() {
            return Err(ClientError::validation(
                "at least one synonym group is required",
            ));
        }
        let path = format!("{}/batch", self.synonyms_path()?);
        self.client
            .execute(HttpRequest::post(path).with_body(to_body(request)?))
            .await
    }

    /// Delete every synonym group of the index.
    pub async fn delete_all(&self) -> Result<UpdateIdResponse, ClientError> {
        let path = self.synonyms_path()?;
        self.client.execute(HttpRequest::delete(path)).await
    }
}

//! Stop-word operations.

use crate::client::{require_non_empty, segment, to_body, Client};
use crate::errors::ClientError;
use crate::interfaces::HttpRequest;
use meili_client_shared::UpdateIdResponse;

/// Handle on the stop-words of one index.
#[derive(Debug, Clone)]
pub struct StopWordsApi<'a> {
    client: &'a Client,
    index_uid: String,
}

impl<'a> StopWordsApi<'a> {
    pub(crate) fn new(client: &'a Client, index_uid: String) -> Self {
        Self { client, index_uid }
    }

    fn stop_words_path(&self) -> Result<String, ClientError> {
        require_non_empty("index uid", &self.index_uid)?;
        Ok(format!("/indexes/{}/stop-words", segment(&self.index_uid)))
    }

    fn require_words(words: &[String]) -> Result<(), ClientError> {
        if words.is_empty() {
            return Err(ClientError::validation("at least one stop-word is required"));
        }
        Ok(())
    }

    pub async fn list(&self) -> Result<Vec<String>, ClientError> {
        let path = self.stop_words_path()?;
        self.client.execute(HttpRequest::get(path)).await
    }

    /// Add stop-words. The service answers with one handle per enqueued update.
    pub async fn add(&self, words: &[String]) -> Result<Vec<UpdateIdResponse>, ClientError> {
        Self::require_words(words)?;
        let path = self.stop_words_path()?;
        self.client
            .execute(HttpRequest::patch(path).with_body(to_body(words)?))
            .await
    }

    /// Remove stop-words.
    pub async fn deletes(&self, words: &[String]) -> Result<Vec<UpdateIdResponse>, ClientError> {
        Self::require_words(words)?;
        let path = format!("{}/delete", self.stop_words_path()?);
        self.client
            .execute(HttpRequest::post(path).with_body(to_body(words)?))
            .await
    }
}

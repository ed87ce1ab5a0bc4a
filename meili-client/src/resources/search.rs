//! Search operations.

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::client::{require_non_empty, segment, Client};
use crate::errors::ClientError;
use crate::interfaces::HttpRequest;
use meili_client_shared::{SearchRequest, SearchResponse};

/// Handle on the search endpoint of one index.
#[derive(Debug, Clone)]
pub struct SearchApi<'a> {
    client: &'a Client,
    index_uid: String,
}

impl<'a> SearchApi<'a> {
    pub(crate) fn new(client: &'a Client, index_uid: String) -> Self {
        Self { client, index_uid }
    }

    /// Search the index, decoding each hit as `T`.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let response: SearchResponse<Movie> = client
    ///     .search("movies")
    ///     .search(&SearchRequest::new("batman").with_limit(5))
    ///     .await?;
    /// println!("{} hits in {}ms", response.hits.len(), response.processing_time_ms);
    /// ```
    pub async fn search<T: DeserializeOwned>(
        &self,
        request: &SearchRequest,
    ) -> Result<SearchResponse<T>, ClientError> {
        require_non_empty("index uid", &self.index_uid)?;
        let path = format!("/indexes/{}/search", segment(&self.index_uid));

        let response: SearchResponse<T> = self
            .client
            .execute(HttpRequest::get(path).with_query(request.query_pairs()))
            .await?;

        debug!(
            index = %self.index_uid,
            hits = response.hits.len(),
            processing_time_ms = response.processing_time_ms,
            "Search completed"
        );
        Ok(response)
    }
}

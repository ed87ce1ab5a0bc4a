//! Statistics operations.

use crate::client::{require_non_empty, segment, Client};
use crate::errors::ClientError;
use crate::interfaces::HttpRequest;
use meili_client_shared::{GlobalStats, IndexStats, Stats};

/// Handle on index statistics.
#[derive(Debug, Clone, Copy)]
pub struct StatsApi<'a> {
    client: &'a Client,
}

impl<'a> StatsApi<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Statistics of one index.
    pub async fn get(&self, index_uid: &str) -> Result<Stats, ClientError> {
        require_non_empty("index uid", index_uid)?;
        let path = format!("/stats/{}", segment(index_uid));
        self.client.execute(HttpRequest::get(path)).await
    }

    /// Statistics of every index, ordered by uid.
    pub async fn list(&self) -> Result<Vec<IndexStats>, ClientError> {
        let global: GlobalStats = self.client.execute(HttpRequest::get("/stats")).await?;
        Ok(global.into_index_stats())
    }
}

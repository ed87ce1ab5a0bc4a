//! Update tracking.
//!
//! Mutations return an [`UpdateIdResponse`] as soon as the service accepts
//! them. This handle resolves those handles into the applied (or failed)
//! [`Update`].

use std::time::Duration;

use tokio::time::{sleep, Instant};
use tracing::{debug, warn};

use crate::client::{require_non_empty, segment, Client};
use crate::errors::ClientError;
use crate::interfaces::HttpRequest;
use meili_client_shared::{Update, UpdateIdResponse, UpdateState};

/// Handle on the updates of one index.
#[derive(Debug, Clone)]
pub struct UpdatesApi<'a> {
    client: &'a Client,
    index_uid: String,
}

impl<'a> UpdatesApi<'a> {
    pub(crate) fn new(client: &'a Client, index_uid: String) -> Self {
        Self { client, index_uid }
    }

    fn updates_path(&self) -> Result<String, ClientError> {
        require_non_empty("index uid", &self.index_uid)?;
        Ok(format!("/indexes/{}/updates", segment(&self.index_uid)))
    }

    /// Fetch one update.
    pub async fn get(&self, update_id: u64) -> Result<Update, ClientError> {
        let path = format!("{}/{}", self.updates_path()?, update_id);
        self.client.execute(HttpRequest::get(path)).await
    }

    /// List the updates of the index.
    pub async fn list(&self) -> Result<Vec<Update>, ClientError> {
        let path = self.updates_path()?;
        self.client.execute(HttpRequest::get(path)).await
    }

    /// Check once whether an update has been applied.
    pub async fn poll(&self, handle: UpdateIdResponse) -> Result<UpdateState, ClientError> {
        let update = self.get(handle.update_id).await?;
        Ok(UpdateState::from(update))
    }

    /// Poll every `interval` until the update is resolved or `timeout` elapses.
    ///
    /// A failed update is returned as `Ok`; check [`Update::status`]. Any
    /// error from a poll is returned immediately.
    ///
    /// # Returns
    ///
    /// * `Ok(Update)` - The processed or failed update
    /// * `Err(ClientError::Timeout)` - If the update was still enqueued at the deadline
    pub async fn wait_for(
        &self,
        handle: UpdateIdResponse,
        interval: Duration,
        timeout: Duration,
    ) -> Result<Update, ClientError> {
        let started = Instant::now();
        loop {
            match self.poll(handle).await? {
                UpdateState::Resolved(update) => {
                    if update.is_failed() {
                        warn!(
                            index = %self.index_uid,
                            update_id = update.update_id,
                            error = update.error.as_deref().unwrap_or_default(),
                            "Update failed"
                        );
                    } else {
                        debug!(
                            index = %self.index_uid,
                            update_id = update.update_id,
                            "Update processed"
                        );
                    }
                    return Ok(update);
                }
                UpdateState::Pending(_) => {
                    let waited = started.elapsed();
                    if waited >= timeout {
                        return Err(ClientError::Timeout {
                            update_id: handle.update_id,
                            waited_ms: waited.as_millis() as u64,
                        });
                    }
                    sleep(interval.min(timeout - waited)).await;
                }
            }
        }
    }
}

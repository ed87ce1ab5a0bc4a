//! Asynchronous update records.
//!
//! Every mutating call on documents, schema, settings, synonyms or
//! stop-words is accepted by the service and applied later. The call returns
//! an [`UpdateIdResponse`] handle; the state of the change is observed by
//! fetching the matching [`Update`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Handle to a pending asynchronous mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateIdResponse {
    pub update_id: u64,
}

impl UpdateIdResponse {
    pub fn new(update_id: u64) -> Self {
        Self { update_id }
    }
}

/// Processing status of an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum UpdateStatus {
    Enqueued,
    Processed,
    Failed,
}

/// Kind of change an update applies, e.g. `DocumentsAddition`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateType {
    pub name: String,
    /// Number of items affected, for batch kinds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<u64>,
}

/// An update as tracked by the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Update {
    pub status: UpdateStatus,
    pub update_id: u64,
    #[serde(rename = "type")]
    pub update_type: UpdateType,
    /// Failure reason when `status` is `Failed`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Processing duration in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    pub enqueued_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub processed_at: Option<DateTime<Utc>>,
}

impl Update {
    /// The handle this update answers to.
    pub fn handle(&self) -> UpdateIdResponse {
        UpdateIdResponse::new(self.update_id)
    }

    pub fn is_failed(&self) -> bool {
        self.status == UpdateStatus::Failed
    }
}

/// Two-phase view of an update: accepted but not yet applied, or done.
///
/// `Resolved` covers both processed and failed updates; inspect
/// [`Update::status`] to tell them apart.
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateState {
    Pending(UpdateIdResponse),
    Resolved(Update),
}

impl UpdateState {
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending(_))
    }

    pub fn handle(&self) -> UpdateIdResponse {
        match self {
            Self::Pending(handle) => *handle,
            Self::Resolved(update) => update.handle(),
        }
    }
}

impl From<Update> for UpdateState {
    fn from(update: Update) -> Self {
        match update.status {
            UpdateStatus::Enqueued => Self::Pending(update.handle()),
            UpdateStatus::Processed | UpdateStatus::Failed => Self::Resolved(update),
        }
    }
}

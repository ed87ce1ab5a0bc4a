//! Index records.
//!
//! An index is a named collection of documents governed by a schema. Its
//! `uid` is either supplied at creation or generated by the service, and
//! never changes afterwards.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::schema::Schema;

/// An index as reported by the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Index {
    /// Unique identifier of the index.
    pub uid: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Last modification time.
    pub updated_at: DateTime<Utc>,
}

/// Request to create a new index.
///
/// Every field is optional. Without a `uid` the service generates one and
/// returns it in [`CreateIndexResponse`]. Without a `schema` the service
/// infers one from the first document added.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateIndexRequest {
    /// Caller-chosen unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
    /// Display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Initial schema.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<Schema>,
}

impl CreateIndexRequest {
    /// Create an empty request; the service assigns the uid.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the uid of the new index.
    pub fn with_uid(mut self, uid: impl Into<String>) -> Self {
        self.uid = Some(uid.into());
        self
    }

    /// Set the display name of the new index.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the initial schema of the new index.
    pub fn with_schema(mut self, schema: Schema) -> Self {
        self.schema = Some(schema);
        self
    }
}

/// Response to a successful index creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateIndexResponse {
    /// The uid of the created index, generated when none was requested.
    pub uid: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Schema the index was created with, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<Schema>,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Last modification time.
    pub updated_at: DateTime<Utc>,
    /// Update enqueued to apply the schema, when one was supplied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update_id: Option<u64>,
}

/// Request body to rename an index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateIndexRequest {
    /// New display name.
    pub name: String,
}

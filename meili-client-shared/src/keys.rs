//! API key records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A permission granted to an API key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Acl {
    DocumentsRead,
    DocumentsWrite,
    IndexesRead,
    IndexesWrite,
    KeysRead,
    KeysWrite,
    StatsRead,
    SettingsRead,
    SettingsWrite,
    Admin,
    #[serde(rename = "*")]
    All,
}

/// An API key and its permissions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiKey {
    pub key: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub acl: Vec<Acl>,
    /// Index uids the key applies to; `*` means every index.
    #[serde(default)]
    pub indexes: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub revoked: bool,
}

/// Request to create an API key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateApiKeyRequest {
    pub description: String,
    pub acl: Vec<Acl>,
    pub indexes: Vec<String>,
    /// Expiry as a unix timestamp in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<i64>,
}

impl CreateApiKeyRequest {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            acl: Vec::new(),
            indexes: Vec::new(),
            expires_at: None,
        }
    }

    pub fn with_acl(mut self, acl: impl IntoIterator<Item = Acl>) -> Self {
        self.acl = acl.into_iter().collect();
        self
    }

    pub fn with_indexes<I, S>(mut self, indexes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.indexes = indexes.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_expires_at(mut self, expires_at: DateTime<Utc>) -> Self {
        self.expires_at = Some(expires_at.timestamp());
        self
    }
}

/// Request to update an existing API key.
///
/// `key` selects the key to update and only travels in the request path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateApiKeyRequest {
    #[serde(skip)]
    pub key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acl: Option<Vec<Acl>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub indexes: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revoked: Option<bool>,
}

impl UpdateApiKeyRequest {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            description: None,
            acl: None,
            indexes: None,
            revoked: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_acl(mut self, acl: impl IntoIterator<Item = Acl>) -> Self {
        self.acl = Some(acl.into_iter().collect());
        self
    }

    pub fn with_indexes<I, S>(mut self, indexes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.indexes = Some(indexes.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_revoked(mut self, revoked: bool) -> Self {
        self.revoked = Some(revoked);
        self
    }

    /// Check if any fields are set for update.
    pub fn has_updates(&self) -> bool {
        self.description.is_some()
            || self.acl.is_some()
            || self.indexes.is_some()
            || self.revoked.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_acl_wildcard() {
        let acl: Vec<Acl> = serde_json::from_value(json!(["*", "documentsRead"])).unwrap();
        assert_eq!(acl, vec![Acl::All, Acl::DocumentsRead]);
    }

    #[test]
    fn test_update_request_body_skips_key() {
        let request = UpdateApiKeyRequest::new("abc")
            .with_description("search only")
            .with_revoked(true);

        let body = serde_json::to_value(&request).unwrap();

        assert_eq!(body, json!({ "description": "search only", "revoked": true }));
        assert!(request.has_updates());
        assert!(!UpdateApiKeyRequest::new("abc").has_updates());
    }
}

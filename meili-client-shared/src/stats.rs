//! Index statistics.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Statistics of one index.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub number_of_documents: u64,
    pub is_indexing: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_update: Option<DateTime<Utc>>,
    /// Number of documents carrying each attribute.
    #[serde(default)]
    pub fields_frequency: BTreeMap<String, u64>,
}

/// Statistics of every index, as returned by the global endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalStats {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database_size: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_update: Option<DateTime<Utc>>,
    #[serde(default)]
    pub indexes: BTreeMap<String, Stats>,
}

/// Statistics of one index paired with its uid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexStats {
    pub uid: String,
    pub stats: Stats,
}

impl GlobalStats {
    /// Flatten into one entry per index, ordered by uid.
    pub fn into_index_stats(self) -> Vec<IndexStats> {
        self.indexes
            .into_iter()
            .map(|(uid, stats)| IndexStats { uid, stats })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_global_stats_flatten() {
        let global: GlobalStats = serde_json::from_value(json!({
            "databaseSize": 447819776,
            "indexes": {
                "movies": {
                    "numberOfDocuments": 19654,
                    "isIndexing": false,
                    "fieldsFrequency": { "title": 19654 }
                },
                "books": { "numberOfDocuments": 5, "isIndexing": true }
            }
        }))
        .unwrap();

        let stats = global.into_index_stats();

        assert_eq!(stats.len(), 2);
        assert_eq!(stats[0].uid, "books");
        assert!(stats[0].stats.is_indexing);
        assert_eq!(stats[1].stats.fields_frequency.get("title"), Some(&19654));
    }
}

//! Index settings.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Ranking settings of an index.
///
/// Settings are replaced as a whole: fields left unset are defaulted by the
/// service, never merged with the previous value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Order in which ranking rules apply.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ranking_order: Option<Vec<String>>,
    /// Attribute used to deduplicate results.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distinct_field: Option<String>,
    /// Custom ranking rules, attribute to `asc`/`dsc`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ranking_rules: Option<BTreeMap<String, String>>,
}

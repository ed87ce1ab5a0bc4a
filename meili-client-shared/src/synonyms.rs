//! Synonym records.

use std::collections::BTreeMap;

/// One entry of the synonym listing: a word and its synonyms.
pub type ListSynonymsResponse = BTreeMap<String, Vec<String>>;

/// Several synonym groups created in one call, word to synonyms.
pub type BatchCreateSynonymsRequest = BTreeMap<String, Vec<String>>;

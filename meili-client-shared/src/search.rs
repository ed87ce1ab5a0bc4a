//! Search request and response types.

use serde::{Deserialize, Serialize};

/// Parameters of a search in one index.
///
/// Only `query` is required. Every other parameter is left to the
/// service's default when unset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchRequest {
    /// The query text.
    pub query: String,
    /// Number of hits to skip.
    pub offset: Option<u64>,
    /// Maximum number of hits to return.
    pub limit: Option<u64>,
    /// Attributes to include in each hit.
    pub attributes_to_retrieve: Vec<String>,
    /// Restrict matching to these attributes.
    pub attributes_to_search_in: Vec<String>,
    /// Attributes whose values are cropped around the matches.
    pub attributes_to_crop: Vec<String>,
    /// Length of the cropped values.
    pub crop_length: Option<u64>,
    /// Attributes whose matches are highlighted.
    pub attributes_to_highlight: Vec<String>,
    /// Filter expression.
    pub filters: Option<String>,
    /// Search timeout in milliseconds.
    pub timeout_ms: Option<u64>,
    /// Return match positions with each hit.
    pub matches: Option<bool>,
}

impl SearchRequest {
    /// Create a search for the given query text.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Default::default()
        }
    }

    pub fn with_offset(mut self, offset: u64) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn with_limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_attributes_to_retrieve<I, S>(mut self, attributes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.attributes_to_retrieve = attributes.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_attributes_to_search_in<I, S>(mut self, attributes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.attributes_to_search_in = attributes.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_attributes_to_crop<I, S>(mut self, attributes: I, crop_length: u64) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.attributes_to_crop = attributes.into_iter().map(Into::into).collect();
        self.crop_length = Some(crop_length);
        self
    }

    pub fn with_attributes_to_highlight<I, S>(mut self, attributes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.attributes_to_highlight = attributes.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_filters(mut self, filters: impl Into<String>) -> Self {
        self.filters = Some(filters.into());
        self
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = Some(timeout_ms);
        self
    }

    pub fn with_matches(mut self, matches: bool) -> Self {
        self.matches = Some(matches);
        self
    }

    /// Query-string pairs for the search endpoint.
    ///
    /// `q` is always present; list parameters are comma-joined and omitted
    /// when empty.
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = vec![("q".to_string(), self.query.clone())];

        let mut push_list = |key: &str, values: &[String]| {
            if !values.is_empty() {
                pairs.push((key.to_string(), values.join(",")));
            }
        };
        push_list("attributesToRetrieve", &self.attributes_to_retrieve);
        push_list("attributesToSearchIn", &self.attributes_to_search_in);
        push_list("attributesToCrop", &self.attributes_to_crop);
        push_list("attributesToHighlight", &self.attributes_to_highlight);

        if let Some(offset) = self.offset {
            pairs.push(("offset".to_string(), offset.to_string()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit".to_string(), limit.to_string()));
        }
        if let Some(crop_length) = self.crop_length {
            pairs.push(("cropLength".to_string(), crop_length.to_string()));
        }
        if let Some(ref filters) = self.filters {
            pairs.push(("filters".to_string(), filters.clone()));
        }
        if let Some(timeout_ms) = self.timeout_ms {
            pairs.push(("timeoutMs".to_string(), timeout_ms.to_string()));
        }
        if let Some(matches) = self.matches {
            pairs.push(("matches".to_string(), matches.to_string()));
        }
        pairs
    }
}

/// Result page of a search, with hits decoded as `T`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse<T> {
    /// Matching documents in relevance order.
    pub hits: Vec<T>,
    pub offset: u64,
    pub limit: u64,
    /// Time the service spent on the query.
    pub processing_time_ms: u64,
    /// The query text as understood by the service.
    pub query: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn test_minimal_query_pairs() {
        let pairs = SearchRequest::new("batman").query_pairs();

        assert_eq!(pairs, vec![("q".to_string(), "batman".to_string())]);
    }

    #[test]
    fn test_full_query_pairs() {
        let request = SearchRequest::new("batman")
            .with_limit(5)
            .with_attributes_to_retrieve(["title", "overview"])
            .with_attributes_to_crop(["overview"], 20)
            .with_filters("release_date > 2000")
            .with_matches(true);

        let pairs = request.query_pairs();

        assert!(pairs.contains(&("limit".to_string(), "5".to_string())));
        assert!(pairs.contains(&(
            "attributesToRetrieve".to_string(),
            "title,overview".to_string()
        )));
        assert!(pairs.contains(&("attributesToCrop".to_string(), "overview".to_string())));
        assert!(pairs.contains(&("cropLength".to_string(), "20".to_string())));
        assert!(pairs.contains(&("filters".to_string(), "release_date > 2000".to_string())));
        assert!(pairs.contains(&("matches".to_string(), "true".to_string())));
        assert!(!pairs.iter().any(|(key, _)| key == "offset"));
    }

    #[test]
    fn test_response_decodes_generic_hits() {
        let body = json!({
            "hits": [{ "id": "1", "title": "Batman" }],
            "offset": 0,
            "limit": 20,
            "processingTimeMs": 2,
            "query": "batman"
        });

        let response: SearchResponse<Value> = serde_json::from_value(body).unwrap();

        assert_eq!(response.hits.len(), 1);
        assert_eq!(response.hits[0]["title"], "Batman");
        assert_eq!(response.processing_time_ms, 2);
    }
}

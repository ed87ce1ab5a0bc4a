//! Document listing parameters.

/// Parameters for listing the documents of an index.
///
/// Documents themselves are caller-defined types; only the listing
/// parameters are fixed by the service.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListDocumentsRequest {
    /// Number of documents to skip.
    pub offset: Option<u64>,
    /// Maximum number of documents to return.
    pub limit: Option<u64>,
    /// Attributes to include in each returned document.
    pub attributes_to_retrieve: Vec<String>,
}

impl ListDocumentsRequest {
    pub fn new() -> Self {
        Self::default()
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

    /// Query-string pairs for the listing endpoint. Unset parameters are omitted.
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Some(offset) = self.offset {
            pairs.push(("offset".to_string(), offset.to_string()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit".to_string(), limit.to_string()));
        }
        if !self.attributes_to_retrieve.is_empty() {
            pairs.push((
                "attributesToRetrieve".to_string(),
                self.attributes_to_retrieve.join(","),
            ));
        }
        pairs
    }
}

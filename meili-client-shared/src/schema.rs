//! Schema records.
//!
//! The service exposes a schema in two shapes: a compact map from attribute
//! name to its list of properties, and a raw form with an explicit
//! identifier and one boolean per property.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A property an attribute can carry in a [`Schema`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SchemaAttribute {
    /// The attribute holds the document's unique identifier.
    Identifier,
    /// The attribute is searchable.
    Indexed,
    /// The attribute is returned in results.
    Displayed,
    /// The attribute can be used in ranking rules.
    Ranked,
}

/// Compact schema: attribute name to its properties.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Schema(pub BTreeMap<String, Vec<SchemaAttribute>>);

impl Schema {
    /// Create an empty schema.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace an attribute with the given properties.
    pub fn with_attribute(
        mut self,
        name: impl Into<String>,
        properties: impl IntoIterator<Item = SchemaAttribute>,
    ) -> Self {
        self.0.insert(name.into(), properties.into_iter().collect());
        self
    }

    /// Properties of one attribute.
    pub fn attribute(&self, name: &str) -> Option<&[SchemaAttribute]> {
        self.0.get(name).map(Vec::as_slice)
    }

    /// Name of the attribute flagged as identifier.
    pub fn identifier(&self) -> Option<&str> {
        self.0
            .iter()
            .find(|(_, properties)| properties.contains(&SchemaAttribute::Identifier))
            .map(|(name, _)| name.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// One attribute of a [`RawSchema`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawAttribute {
    #[serde(default)]
    pub indexed: bool,
    #[serde(default)]
    pub displayed: bool,
    #[serde(default)]
    pub ranked: bool,
}

/// Raw schema with the identifier attribute named explicitly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawSchema {
    /// Name of the identifier attribute.
    pub identifier: String,
    /// Per-attribute properties.
    #[serde(default)]
    pub attributes: BTreeMap<String, RawAttribute>,
}

/// Build the schema from its raw form.
///
/// The identifier attribute always carries the `Identifier` flag, even when
/// `raw.attributes` has no entry for it.
impl From<&RawSchema> for Schema {
    fn from(raw: &RawSchema) -> Self {
        let mut schema = Schema::new();
        if !raw.identifier.is_empty() && !raw.attributes.contains_key(&raw.identifier) {
            schema
                .0
                .insert(raw.identifier.clone(), vec![SchemaAttribute::Identifier]);
        }
        for (name, attribute) in &raw.attributes {
            let mut properties = Vec::new();
            if *name == raw.identifier {
                properties.push(SchemaAttribute::Identifier);
            }
            if attribute.indexed {
                properties.push(SchemaAttribute::Indexed);
            }
            if attribute.displayed {
                properties.push(SchemaAttribute::Displayed);
            }
            if attribute.ranked {
                properties.push(SchemaAttribute::Ranked);
            }
            schema.0.insert(name.clone(), properties);
        }
        schema
    }
}

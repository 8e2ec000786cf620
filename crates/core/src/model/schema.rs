//! Record schema definitions consumed by the naming-based candidate finder

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use super::document_root;
use crate::error::DiscoveryError;

/// A single declared property of a schema.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyDef {
    /// Declared type, when the source document carries one.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub property_type: Option<String>,
}

/// A named record schema: a mapping of property name to definition.
///
/// Keys are unique; insertion order is irrelevant (properties are kept
/// sorted so every scan over them is deterministic).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaDef {
    #[serde(default)]
    pub properties: BTreeMap<String, PropertyDef>,
}

/// The full set of schemas under analysis, keyed by schema name.
#[derive(Debug, Clone, Default)]
pub struct SchemaSet {
    schemas: BTreeMap<String, SchemaDef>,
}

impl SchemaSet {
    /// Create an empty schema set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a schema. The first definition of a name wins; later
    /// documents cannot overwrite it.
    pub fn insert(&mut self, name: impl Into<String>, def: SchemaDef) {
        self.schemas.entry(name.into()).or_insert(def);
    }

    /// Extract `components.schemas` from an OpenAPI-style document and merge
    /// them in. A document without a well-formed schemas object yields an
    /// empty contribution. Returns the number of newly registered schemas.
    pub fn merge_document(&mut self, doc: &Value) -> usize {
        let Some(schemas) = document_root(doc)
            .and_then(|root| root.get("components"))
            .and_then(|components| components.get("schemas"))
            .and_then(Value::as_object)
        else {
            warn!("document carries no components.schemas object; skipping");
            return 0;
        };

        let mut added = 0;
        for (name, definition) in schemas {
            if self.schemas.contains_key(name) {
                continue;
            }
            self.schemas.insert(name.clone(), parse_schema(definition));
            added += 1;
        }
        debug!(added, total = self.schemas.len(), "merged schema document");
        added
    }

    /// Parse a JSON document string and merge its schemas.
    pub fn merge_json(&mut self, json: &str) -> Result<usize, DiscoveryError> {
        let doc: Value = serde_json::from_str(json)?;
        Ok(self.merge_document(&doc))
    }

    /// Schema names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.schemas.keys().map(String::as_str)
    }

    /// Iterate schemas in sorted name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SchemaDef)> {
        self.schemas.iter().map(|(name, def)| (name.as_str(), def))
    }

    /// Look up a schema by name.
    pub fn get(&self, name: &str) -> Option<&SchemaDef> {
        self.schemas.get(name)
    }

    /// Number of registered schemas.
    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }
}

/// Pull the property map out of one schema definition, tolerating missing
/// or malformed `properties`.
fn parse_schema(definition: &Value) -> SchemaDef {
    let mut properties = BTreeMap::new();
    if let Some(props) = definition.get("properties").and_then(Value::as_object) {
        for (name, prop) in props {
            let property_type = prop
                .get("type")
                .and_then(Value::as_str)
                .map(str::to_string);
            properties.insert(name.clone(), PropertyDef { property_type });
        }
    }
    SchemaDef { properties }
}

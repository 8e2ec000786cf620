//! Record collections and their identifier sets

use std::collections::{BTreeMap, BTreeSet};

use serde_json::{Map, Value};
use tracing::debug;

use crate::stringify::stringify;

/// Exact identifier keys probed, in order, before falling back to the first
/// `*id`-suffixed field.
const ID_KEYS: [&str; 4] = ["id", "_id", "Id", "ID"];

/// An ordered sequence of JSON records from one collection.
///
/// Entries are not guaranteed to be mappings; non-mapping entries are
/// skipped by every operation here.
#[derive(Debug, Clone, Default)]
pub struct Collection {
    records: Vec<Value>,
}

/// Gathered values of a single field across a collection's records.
#[derive(Debug, Clone, Default)]
pub struct FieldValues {
    /// Distinct canonical values, nulls excluded. Ordered, so intersections
    /// iterate deterministically.
    pub values: BTreeSet<String>,
    /// Non-null occurrences of the field.
    pub total_values: usize,
    /// Records where the field was null or absent.
    pub null_count: usize,
}

impl Collection {
    /// Wrap an ordered sequence of records.
    pub fn new(records: Vec<Value>) -> Self {
        Self { records }
    }

    /// The raw records, in input order.
    pub fn records(&self) -> &[Value] {
        &self.records
    }

    /// Number of records, mapping-typed or not.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the collection holds no records at all.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The first mapping-typed record, used as the representative sample
    /// for field enumeration.
    pub fn sample(&self) -> Option<&Map<String, Value>> {
        self.records.iter().find_map(Value::as_object)
    }

    /// Canonical identifier values across all mapping-typed records.
    pub fn identifier_set(&self) -> BTreeSet<String> {
        let mut ids = BTreeSet::new();
        for record in self.records.iter().filter_map(Value::as_object) {
            if let Some(key) = identifier_field(record)
                && let Some(value) = record.get(key)
                && !value.is_null()
            {
                ids.insert(stringify(value));
            }
        }
        ids
    }

    /// Gather one field's values across all mapping-typed records.
    pub fn field_values(&self, field: &str) -> FieldValues {
        let mut gathered = FieldValues::default();
        for record in self.records.iter().filter_map(Value::as_object) {
            match record.get(field) {
                None | Some(Value::Null) => gathered.null_count += 1,
                Some(value) => {
                    gathered.total_values += 1;
                    gathered.values.insert(stringify(value));
                }
            }
        }
        gathered
    }
}

/// The identifier field of a record: `id`, `_id`, `Id`, `ID` in priority
/// order, else the first key (sorted order) ending in `id`.
pub fn identifier_field(record: &Map<String, Value>) -> Option<&str> {
    for key in ID_KEYS {
        if record.contains_key(key) {
            return Some(key);
        }
    }
    record
        .keys()
        .find(|k| k.to_ascii_lowercase().ends_with("id"))
        .map(String::as_str)
}

/// The full set of collections under analysis, keyed by collection name.
#[derive(Debug, Clone, Default)]
pub struct CollectionSet {
    collections: BTreeMap<String, Collection>,
}

impl CollectionSet {
    /// Create an empty collection set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a collection under a name, replacing any previous one.
    pub fn insert(&mut self, name: impl Into<String>, collection: Collection) {
        let name = name.into();
        debug!(name = %name, records = collection.len(), "registered collection");
        self.collections.insert(name, collection);
    }

    /// Look up a collection by name.
    pub fn get(&self, name: &str) -> Option<&Collection> {
        self.collections.get(name)
    }

    /// Iterate collections in sorted name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Collection)> {
        self.collections
            .iter()
            .map(|(name, coll)| (name.as_str(), coll))
    }

    /// Identifier sets for every collection, keyed by name.
    pub fn identifier_sets(&self) -> BTreeMap<&str, BTreeSet<String>> {
        self.iter()
            .map(|(name, coll)| (name, coll.identifier_set()))
            .collect()
    }

    /// Number of registered collections.
    pub fn len(&self) -> usize {
        self.collections.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.collections.is_empty()
    }
}

/// Extract the record sequence from a fetched document: a bare array, an
/// object wrapping the array under `data`/`items`/`results`, or a single
/// record. Anything else yields no records.
pub fn records_from_document(doc: &Value) -> Vec<Value> {
    match doc {
        Value::Array(items) => items.clone(),
        Value::Object(map) => {
            for key in ["data", "items", "results"] {
                if let Some(Value::Array(items)) = map.get(key) {
                    return items.clone();
                }
            }
            vec![doc.clone()]
        }
        _ => Vec::new(),
    }
}

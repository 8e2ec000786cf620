//! CLI command implementations

pub mod analyze;
pub mod overlap;
pub mod verify;

use fk_discovery_core::model::{Collection, CollectionSet, records_from_document};
use serde_json::Value;

/// Build a collection set from loaded snapshot documents, one collection
/// per file.
pub(crate) fn collections_from_documents(documents: &[(String, Value)]) -> CollectionSet {
    let mut collections = CollectionSet::new();
    for (name, doc) in documents {
        collections.insert(name.clone(), Collection::new(records_from_document(doc)));
    }
    collections
}

//! Input data model for the discovery engine
//!
//! The engine consumes already-materialized JSON snapshots: named record
//! schemas on the static side, named record collections on the data side.
//! Everything here is derived, read-only, and rebuilt fresh per run.

mod collection;
mod schema;

pub use collection::{Collection, CollectionSet, FieldValues, identifier_field, records_from_document};
pub use schema::{PropertyDef, SchemaDef, SchemaSet};

use serde_json::Value;

/// Unwrap the root object of a fetched document. Many snapshot files are a
/// list whose first element holds the actual document.
pub(crate) fn document_root(value: &Value) -> Option<&Value> {
    match value {
        Value::Object(_) => Some(value),
        Value::Array(items) => items.first().filter(|v| v.is_object()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_document_root_unwraps_list() {
        let doc = json!([{"components": {}}, {"ignored": true}]);
        assert!(document_root(&doc).is_some());
        assert!(document_root(&json!({"a": 1})).is_some());
        assert!(document_root(&json!([])).is_none());
        assert!(document_root(&json!(3)).is_none());
        assert!(document_root(&json!([3])).is_none());
    }
}

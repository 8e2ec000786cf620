//! Relationship hints from API endpoint path templates
//!
//! A template like `/Asset/{collectionIndex}/End_User:get` marks an
//! `Asset → End_User` relationship: the first segment names the source
//! entity, the second is a parameter placeholder, and the third names the
//! related entity, terminated by the HTTP-method delimiter. Matching is
//! syntactic only; the related entity is not validated against known
//! schemas.

use std::collections::{BTreeMap, BTreeSet};

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use tracing::warn;

use crate::model::document_root;

/// `source → set of targets` hints extracted from path templates.
///
/// Keyed and ordered deterministically; targets are deduplicated.
pub type PathRelationships = BTreeMap<String, BTreeSet<String>>;

/// Pattern: `/<Source>/{param}/<Target>:<method>`.
static RELATION_PATH: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^/([^/]+)/\{[^}]+\}/([^:/]+):").expect("relation path pattern"));

/// Extract relationship hints from a set of path-template strings.
///
/// Templates that do not match the three-segment shape contribute nothing.
pub fn extract_path_relationships<'a, I>(templates: I) -> PathRelationships
where
    I: IntoIterator<Item = &'a str>,
{
    let mut relationships = PathRelationships::new();
    for template in templates {
        if let Some(caps) = RELATION_PATH.captures(template) {
            relationships
                .entry(caps[1].to_string())
                .or_default()
                .insert(caps[2].to_string());
        }
    }
    relationships
}

/// Extract relationship hints from the `paths` mapping of an OpenAPI-style
/// document. Only the template keys are consumed; a document without a
/// well-formed `paths` object yields an empty contribution.
pub fn paths_from_document(doc: &Value) -> PathRelationships {
    let Some(paths) = document_root(doc)
        .and_then(|root| root.get("paths"))
        .and_then(Value::as_object)
    else {
        if document_root(doc).is_some_and(|root| root.get("paths").is_some()) {
            warn!("document has a non-object `paths` entry; ignoring");
        }
        return PathRelationships::new();
    };
    extract_path_relationships(paths.keys().map(String::as_str))
}

/// Merge hints from one document into an accumulated map, unioning targets
/// for sources seen before.
pub fn merge_path_relationships(into: &mut PathRelationships, other: PathRelationships) {
    for (source, targets) in other {
        into.entry(source).or_default().extend(targets);
    }
}

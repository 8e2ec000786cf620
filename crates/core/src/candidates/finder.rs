//! Naming-based FK candidate matching, cross-confirmed by path hints

use std::collections::BTreeMap;

use tracing::debug;

use super::types::{CandidateKind, RelationshipCandidate};
use crate::error::DiscoveryError;
use crate::model::SchemaSet;
use crate::naming::{canonical_overlap, has_id_marker, normalize, number_variant, strip_id_suffix};
use crate::paths::PathRelationships;

/// Find FK candidates for every schema, from declared field names and API
/// path hints.
///
/// For each property carrying an `id` marker, target resolution tries, in
/// order: direct canonical containment against schema names (scanned in
/// sorted canonical order, first match wins), an exact canonical match on
/// the suffix-stripped property name, then on its plural/singular variant.
/// Unresolved candidates are emitted with `to = None` rather than dropped.
pub fn find_candidates(
    schemas: &SchemaSet,
    paths: &PathRelationships,
) -> Result<Vec<RelationshipCandidate>, DiscoveryError> {
    if schemas.is_empty() {
        return Err(DiscoveryError::NoSchemas);
    }

    // canonical form -> schema name; BTreeMap pins the scan order
    let canonical_names: BTreeMap<String, &str> =
        schemas.names().map(|name| (normalize(name), name)).collect();

    let mut candidates = Vec::new();

    for (schema_name, schema) in schemas.iter() {
        let named_start = candidates.len();
        let path_targets = paths.get(schema_name);

        for (property, def) in &schema.properties {
            if !has_id_marker(property) {
                continue;
            }
            let property_canon = normalize(property);

            let mut target = resolve_target(&property_canon, property, &canonical_names);

            // An API path hint that overlaps the property name overrides
            // the naming-based guess.
            let mut confirmed_by_path = false;
            if let Some(targets) = path_targets
                && let Some(hinted) = targets
                    .iter()
                    .find(|t| canonical_overlap(&normalize(t), &property_canon))
            {
                target = Some(hinted.clone());
                confirmed_by_path = true;
            }

            candidates.push(RelationshipCandidate {
                from: schema_name.to_string(),
                field: Some(property.clone()),
                property_type: def.property_type.clone(),
                to: target,
                kind: CandidateKind::NamedField,
                confirmed_by_path,
            });
        }

        // Relationships visible only through the API surface: path targets
        // not already captured by a named-field candidate.
        if let Some(targets) = path_targets {
            for target in targets {
                let captured = candidates[named_start..]
                    .iter()
                    .any(|c| c.to.as_deref() == Some(target.as_str()));
                if !captured {
                    candidates.push(RelationshipCandidate {
                        from: schema_name.to_string(),
                        field: None,
                        property_type: None,
                        to: Some(target.clone()),
                        kind: CandidateKind::ApiPathOnly,
                        confirmed_by_path: true,
                    });
                }
            }
        }

        debug!(
            schema = schema_name,
            found = candidates.len() - named_start,
            "scanned schema for FK candidates"
        );
    }

    Ok(candidates)
}

/// Resolve a property name to a target schema via the naming heuristics.
fn resolve_target(
    property_canon: &str,
    property: &str,
    canonical_names: &BTreeMap<String, &str>,
) -> Option<String> {
    // a. direct canonical containment, first match in sorted order wins
    if let Some((_, name)) = canonical_names
        .iter()
        .find(|(canon, _)| canonical_overlap(canon, property_canon))
    {
        return Some((*name).to_string());
    }

    // b. exact canonical match on the suffix-stripped name
    let stem = normalize(strip_id_suffix(property)?);
    if let Some(name) = canonical_names.get(&stem) {
        return Some((*name).to_string());
    }

    // c. exact canonical match on the plural/singular variant
    canonical_names
        .get(&number_variant(&stem))
        .map(|name| (*name).to_string())
}

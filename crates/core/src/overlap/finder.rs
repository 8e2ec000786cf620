//! Value-overlap discovery across record collections

use std::cmp::Reverse;

use tracing::debug;

use super::config::OverlapConfig;
use super::types::OverlapCandidate;
use crate::error::DiscoveryError;
use crate::model::CollectionSet;

/// Discover reference relationships by intersecting field values with other
/// collections' identifier sets.
pub struct OverlapFinder {
    config: OverlapConfig,
}

impl OverlapFinder {
    /// Create a finder with default configuration.
    pub fn new() -> Self {
        Self::with_config(OverlapConfig::default())
    }

    /// Create a finder with custom configuration.
    pub fn with_config(config: OverlapConfig) -> Self {
        Self { config }
    }

    /// Scan every collection's fields against every other collection's
    /// identifier set.
    ///
    /// Fields are enumerated from the first mapping-typed record of each
    /// collection, excluding the collection's own primary identifier.
    /// Results are ranked by descending match count, then source name.
    pub fn find(&self, collections: &CollectionSet) -> Result<Vec<OverlapCandidate>, DiscoveryError> {
        if collections.is_empty() {
            return Err(DiscoveryError::NoCollections);
        }

        let identifier_sets = collections.identifier_sets();
        let mut candidates = Vec::new();

        for (source_name, collection) in collections.iter() {
            let Some(sample) = collection.sample() else {
                debug!(collection = source_name, "no mapping-typed records; skipping");
                continue;
            };

            for field in sample.keys() {
                if is_primary_identifier(field) {
                    continue;
                }
                let values = collection.field_values(field).values;
                if values.is_empty() {
                    continue;
                }

                for (target_name, ids) in &identifier_sets {
                    if *target_name == source_name || ids.is_empty() {
                        continue;
                    }
                    let matches: Vec<&String> = values.intersection(ids).collect();
                    if matches.len() < self.config.min_matches {
                        continue;
                    }
                    candidates.push(OverlapCandidate {
                        from: source_name.to_string(),
                        field: field.clone(),
                        to: (*target_name).to_string(),
                        match_count: matches.len(),
                        sample_matches: matches
                            .iter()
                            .take(self.config.max_sample_matches)
                            .map(|v| (*v).clone())
                            .collect(),
                        name_match: field_relates_to_target(field, target_name),
                    });
                }
            }
        }

        candidates.sort_by(|a, b| {
            (Reverse(a.match_count), &a.from, &a.field, &a.to)
                .cmp(&(Reverse(b.match_count), &b.from, &b.field, &b.to))
        });
        Ok(candidates)
    }
}

impl Default for OverlapFinder {
    fn default() -> Self {
        Self::new()
    }
}

/// The collection's own primary identifier field, excluded from scanning.
fn is_primary_identifier(field: &str) -> bool {
    let lower = field.to_ascii_lowercase();
    lower == "id" || lower == "_id"
}

/// Heuristic annotation: does the field name textually relate to the
/// target collection name? Either the field is `_id`-suffixed and starts
/// with the target's first three characters, or one name contains the
/// other.
fn field_relates_to_target(field: &str, target: &str) -> bool {
    let field = field.to_ascii_lowercase();
    let target = target.to_ascii_lowercase();

    if field.ends_with("_id") {
        let prefix: String = target.chars().take(3).collect();
        if !prefix.is_empty() && field.starts_with(&prefix) {
            return true;
        }
    }
    field.contains(&target) || target.contains(&field)
}

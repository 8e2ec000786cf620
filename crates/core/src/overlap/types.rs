//! Candidate records produced by the value-overlap pipeline

use serde::{Deserialize, Serialize};

/// A field whose observed values intersect another collection's identifier
/// set, suggesting a reference relationship.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverlapCandidate {
    /// Source collection name.
    pub from: String,
    /// Field whose values overlap.
    pub field: String,
    /// Target collection whose identifiers were hit.
    pub to: String,
    /// Size of the intersection between the field's distinct values and the
    /// target's identifier set.
    pub match_count: usize,
    /// Example matching values, bounded, in deterministic order.
    pub sample_matches: Vec<String>,
    /// Whether the field name textually relates to the target collection
    /// name. Annotation only; never filters results.
    pub name_match: bool,
}

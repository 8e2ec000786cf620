//! Candidate relationship records produced by the naming/path pipeline

use serde::{Deserialize, Serialize};

/// How a candidate relationship was surfaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CandidateKind {
    /// An `_id`-style declared property matched against schema names.
    NamedField,
    /// A relationship visible only through the API path surface, with no
    /// corresponding declared field.
    ApiPathOnly,
}

/// A hypothesized foreign-key relationship between two schemas.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationshipCandidate {
    /// Owning schema name.
    pub from: String,
    /// Property the hypothesis is based on; `None` for path-only
    /// candidates.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    /// Declared type of the property, when the schema carries one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_type: Option<String>,
    /// Resolved target schema. `None` when the heuristics found no
    /// plausible target; such candidates are still worth listing.
    pub to: Option<String>,
    /// Evidence category of the candidate.
    pub kind: CandidateKind,
    /// Whether an API path hint independently confirmed the target.
    pub confirmed_by_path: bool,
}

impl RelationshipCandidate {
    /// Evidence source tag used in reports.
    pub fn evidence(&self) -> &'static str {
        match (self.kind, self.confirmed_by_path) {
            (CandidateKind::ApiPathOnly, _) => "api_path_only",
            (CandidateKind::NamedField, true) => "api_path",
            (CandidateKind::NamedField, false) => "field_name",
        }
    }
}

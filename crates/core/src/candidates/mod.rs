//! Naming/path FK candidate pipeline
//!
//! Combines two static evidence sources into one candidate list: declared
//! property names matched against schema names, and source→target hints
//! extracted from API endpoint path templates. A path hint that overlaps a
//! property name confirms (and overrides) the naming-based guess; hints
//! with no corresponding property surface as path-only candidates.
//!
//! # Example
//!
//! ```rust,ignore
//! use fk_discovery_core::candidates::find_candidates;
//! use fk_discovery_core::model::SchemaSet;
//! use fk_discovery_core::paths::PathRelationships;
//!
//! let mut schemas = SchemaSet::new();
//! schemas.merge_json(&std::fs::read_to_string("api_Asset.json")?)?;
//!
//! let candidates = find_candidates(&schemas, &PathRelationships::new())?;
//! for c in &candidates {
//!     println!("{} -> {:?} ({})", c.from, c.to, c.evidence());
//! }
//! ```

mod finder;
mod types;

pub use finder::find_candidates;
pub use types::{CandidateKind, RelationshipCandidate};

//! FK Discovery Core - relationship inference over loosely-typed JSON
//! snapshots
//!
//! Infers foreign-key relationships between record collections from three
//! independent evidence sources:
//! - **Field naming** - `_id`-style properties matched against schema names
//! - **API paths** - source→target hints from endpoint path templates
//! - **Value overlap** - field values intersected with identifier sets
//!
//! plus a **verifier** that scores known relationships against record data.
//!
//! The engine is single-threaded, synchronous, and deterministic: every
//! "first match wins" scan runs over sorted structures, and all derived
//! state is rebuilt from scratch per run. It consumes already-materialized
//! inputs (schema maps, path maps, record collections); fetching, caching
//! and CLI surfaces live in the `fkd` crate.

pub mod candidates;
pub mod error;
pub mod model;
pub mod naming;
pub mod overlap;
pub mod paths;
pub mod report;
pub mod stringify;
pub mod verify;

// Re-export commonly used types
pub use candidates::{CandidateKind, RelationshipCandidate, find_candidates};
pub use error::DiscoveryError;
pub use model::{Collection, CollectionSet, PropertyDef, SchemaDef, SchemaSet};
pub use overlap::{OverlapCandidate, OverlapConfig, OverlapFinder, find_value_overlaps};
pub use paths::{
    PathRelationships, extract_path_relationships, merge_path_relationships, paths_from_document,
};
pub use report::{render_candidate_report, render_overlap_report, render_verification_report};
pub use stringify::{NULL_SENTINEL, stringify};
pub use verify::{
    FkCheck, FkVerifier, VerificationOutcome, VerificationReport, VerificationResult,
    VerificationStatus, VerifyConfig, verify_foreign_keys,
};

//! Relationship verification pipeline
//!
//! Given known `(source, field, target)` triples, computes match-rate
//! statistics between a field's observed values and the target collection's
//! identifier set, and classifies relationship confidence. Unverifiable
//! checks (missing data, no target identifiers, all-null values) surface as
//! distinct outcomes instead of 0% scores.

mod config;
mod types;
mod verifier;

pub use config::{VerifyConfig, VerifyConfigBuilder};
pub use types::{
    FkCheck, VerificationOutcome, VerificationReport, VerificationResult, VerificationStatus,
};
pub use verifier::FkVerifier;

use crate::error::DiscoveryError;
use crate::model::CollectionSet;

/// Verify a list of checks with default configuration.
pub fn verify_foreign_keys(
    collections: &CollectionSet,
    checks: &[FkCheck],
) -> Result<Vec<VerificationReport>, DiscoveryError> {
    FkVerifier::new().verify_all(collections, checks)
}

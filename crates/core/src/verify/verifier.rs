//! Match-rate verification of known relationship triples

use tracing::debug;

use super::config::VerifyConfig;
use super::types::{
    FkCheck, VerificationOutcome, VerificationReport, VerificationResult, VerificationStatus,
};
use crate::error::DiscoveryError;
use crate::model::CollectionSet;

/// Verify explicit `(source, field, target)` relationships against record
/// data.
pub struct FkVerifier {
    config: VerifyConfig,
}

impl FkVerifier {
    /// Create a verifier with default configuration.
    pub fn new() -> Self {
        Self::with_config(VerifyConfig::default())
    }

    /// Create a verifier with custom configuration.
    pub fn with_config(config: VerifyConfig) -> Self {
        Self { config }
    }

    /// Verify every check, in input order.
    pub fn verify_all(
        &self,
        collections: &CollectionSet,
        checks: &[FkCheck],
    ) -> Result<Vec<VerificationReport>, DiscoveryError> {
        if collections.is_empty() {
            return Err(DiscoveryError::NoCollections);
        }
        Ok(checks
            .iter()
            .map(|check| VerificationReport {
                check: check.clone(),
                outcome: self.verify(collections, check),
            })
            .collect())
    }

    /// Verify a single check.
    pub fn verify(&self, collections: &CollectionSet, check: &FkCheck) -> VerificationOutcome {
        let Some(source) = collections.get(&check.source).filter(|c| !c.is_empty()) else {
            return VerificationOutcome::NoSourceData;
        };

        let target_ids = collections
            .get(&check.target)
            .map(|c| c.identifier_set())
            .unwrap_or_default();
        if target_ids.is_empty() {
            return VerificationOutcome::NoTargetIdentifiers;
        }

        let gathered = source.field_values(&check.field);
        if gathered.values.is_empty() {
            return VerificationOutcome::AllValuesNull {
                null_count: gathered.null_count,
            };
        }

        let matched: Vec<&String> = gathered.values.intersection(&target_ids).collect();
        let orphans: Vec<&String> = gathered.values.difference(&target_ids).collect();
        let match_pct = matched.len() as f64 / gathered.values.len() as f64 * 100.0;

        debug!(
            source = %check.source,
            field = %check.field,
            target = %check.target,
            match_pct,
            "verified relationship"
        );

        VerificationOutcome::Verified(VerificationResult {
            total_values: gathered.total_values,
            null_count: gathered.null_count,
            unique_value_count: gathered.values.len(),
            matched_count: matched.len(),
            match_pct,
            status: VerificationStatus::from_match_pct(match_pct),
            orphan_samples: orphans
                .iter()
                .take(self.config.max_orphan_samples)
                .map(|v| (*v).clone())
                .collect(),
            match_samples: matched
                .iter()
                .take(self.config.max_match_samples)
                .map(|v| (*v).clone())
                .collect(),
        })
    }
}

impl Default for FkVerifier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Collection;
    use serde_json::json;

    fn collections(entries: Vec<(&str, Vec<serde_json::Value>)>) -> CollectionSet {
        let mut set = CollectionSet::new();
        for (name, records) in entries {
            set.insert(name, Collection::new(records));
        }
        set
    }

    #[test]
    fn test_half_matched_reports_partial_with_orphan() {
        let set = collections(vec![
            (
                "Asset",
                vec![
                    json!({"id": 1, "Building_Id": 10}),
                    json!({"id": 2, "Building_Id": 99}),
                ],
            ),
            ("Buildings", vec![json!({"id": 10})]),
        ]);
        let outcome =
            FkVerifier::new().verify(&set, &FkCheck::new("Asset", "Building_Id", "Buildings"));

        let VerificationOutcome::Verified(result) = outcome else {
            panic!("expected a verified outcome");
        };
        assert_eq!(result.total_values, 2);
        assert_eq!(result.null_count, 0);
        assert_eq!(result.unique_value_count, 2);
        assert_eq!(result.matched_count, 1);
        assert!((result.match_pct - 50.0).abs() < f64::EPSILON);
        assert_eq!(result.status, VerificationStatus::Partial);
        assert_eq!(result.orphan_samples, vec!["99".to_string()]);
        assert_eq!(result.match_samples, vec!["10".to_string()]);
    }

    #[test]
    fn test_full_match_is_confirmed() {
        let set = collections(vec![
            ("Rooms", vec![json!({"id": 1, "Building_id": 10})]),
            ("Buildings", vec![json!({"id": 10})]),
        ]);
        let outcome =
            FkVerifier::new().verify(&set, &FkCheck::new("Rooms", "Building_id", "Buildings"));

        let VerificationOutcome::Verified(result) = outcome else {
            panic!("expected a verified outcome");
        };
        assert_eq!(result.status, VerificationStatus::Confirmed);
        assert!(result.orphan_samples.is_empty());
    }

    #[test]
    fn test_string_fk_against_numeric_target_identifiers() {
        let set = collections(vec![
            ("SRB_Details", vec![json!({"id": 1, "Vendor_Id": "7"})]),
            ("Vendor", vec![json!({"id": 7})]),
        ]);
        let outcome =
            FkVerifier::new().verify(&set, &FkCheck::new("SRB_Details", "Vendor_Id", "Vendor"));
        let VerificationOutcome::Verified(result) = outcome else {
            panic!("expected a verified outcome");
        };
        assert_eq!(result.matched_count, 1);
    }

    #[test]
    fn test_cannot_verify_outcomes_are_distinct() {
        let set = collections(vec![
            ("Empty", vec![]),
            ("NoIds", vec![json!({"name": "x"})]),
            (
                "Nulls",
                vec![json!({"id": 1, "ref": null}), json!({"id": 2})],
            ),
            ("Target", vec![json!({"id": 1})]),
        ]);
        let verifier = FkVerifier::new();

        assert_eq!(
            verifier.verify(&set, &FkCheck::new("Missing", "f", "Target")),
            VerificationOutcome::NoSourceData
        );
        assert_eq!(
            verifier.verify(&set, &FkCheck::new("Empty", "f", "Target")),
            VerificationOutcome::NoSourceData
        );
        assert_eq!(
            verifier.verify(&set, &FkCheck::new("Nulls", "ref", "NoIds")),
            VerificationOutcome::NoTargetIdentifiers
        );
        assert_eq!(
            verifier.verify(&set, &FkCheck::new("Nulls", "ref", "Target")),
            VerificationOutcome::AllValuesNull { null_count: 2 }
        );
    }

    #[test]
    fn test_verify_all_preserves_check_order() {
        let set = collections(vec![
            ("A", vec![json!({"id": 1, "b_id": 2})]),
            ("B", vec![json!({"id": 2})]),
        ]);
        let checks = vec![
            FkCheck::new("A", "b_id", "B"),
            FkCheck::new("A", "missing", "B"),
        ];
        let reports = FkVerifier::new().verify_all(&set, &checks).unwrap();
        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].check.field, "b_id");
        assert!(matches!(
            reports[1].outcome,
            VerificationOutcome::AllValuesNull { .. }
        ));
    }

    #[test]
    fn test_empty_collection_set_is_an_error() {
        let result = FkVerifier::new().verify_all(&CollectionSet::new(), &[]);
        assert!(matches!(result, Err(DiscoveryError::NoCollections)));
    }

    #[test]
    fn test_orphan_samples_bounded() {
        let records: Vec<_> = (0..20)
            .map(|i| json!({"id": i, "x_id": i + 100}))
            .collect();
        let set = collections(vec![("A", records), ("B", vec![json!({"id": 100})])]);

        let verifier =
            FkVerifier::with_config(VerifyConfig::builder().max_orphan_samples(4).build());
        let VerificationOutcome::Verified(result) =
            verifier.verify(&set, &FkCheck::new("A", "x_id", "B"))
        else {
            panic!("expected a verified outcome");
        };
        assert_eq!(result.matched_count, 1);
        assert_eq!(result.orphan_samples.len(), 4);
    }
}

//! Verification inputs and outcomes

use serde::{Deserialize, Serialize};

/// A `(source collection, field, target collection)` relationship to check
/// against record data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FkCheck {
    /// Collection holding the FK field.
    pub source: String,
    /// Field whose values should reference the target.
    pub field: String,
    /// Collection whose identifiers the values should match.
    pub target: String,
}

impl FkCheck {
    /// Create a new check triple.
    pub fn new(
        source: impl Into<String>,
        field: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            field: field.into(),
            target: target.into(),
        }
    }
}

/// Confidence classification of a verified relationship.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerificationStatus {
    /// Every unique value matched a target identifier.
    Confirmed,
    /// At least half of the unique values matched.
    Partial,
    /// Fewer than half matched.
    Weak,
}

impl VerificationStatus {
    /// Classify a match percentage.
    pub fn from_match_pct(pct: f64) -> Self {
        if pct >= 100.0 {
            Self::Confirmed
        } else if pct >= 50.0 {
            Self::Partial
        } else {
            Self::Weak
        }
    }

    /// One-character report marker.
    pub fn marker(self) -> &'static str {
        match self {
            Self::Confirmed => "✓",
            Self::Partial => "⚠",
            Self::Weak => "✗",
        }
    }
}

/// Match-rate statistics for one verified relationship.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationResult {
    /// Non-null FK values observed in the source.
    pub total_values: usize,
    /// Records where the field was null or absent.
    pub null_count: usize,
    /// Distinct FK values.
    pub unique_value_count: usize,
    /// Distinct values present in the target identifier set.
    pub matched_count: usize,
    /// `matched_count / unique_value_count * 100`.
    pub match_pct: f64,
    /// Confidence classification of `match_pct`.
    pub status: VerificationStatus,
    /// Values present in the source with no matching target identifier,
    /// bounded.
    pub orphan_samples: Vec<String>,
    /// Example values that did match, bounded.
    pub match_samples: Vec<String>,
}

/// Outcome of verifying a single check. The cannot-verify cases are
/// distinct outcomes, never silent 0% scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum VerificationOutcome {
    /// The relationship was scored against record data.
    Verified(VerificationResult),
    /// The source collection is missing or holds no records.
    NoSourceData,
    /// The target collection yields no identifiers.
    NoTargetIdentifiers,
    /// Every value of the field was null or absent.
    AllValuesNull {
        /// Records inspected, all null.
        null_count: usize,
    },
}

/// A check paired with its outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerificationReport {
    /// The triple that was checked.
    #[serde(flatten)]
    pub check: FkCheck,
    /// What the data showed.
    #[serde(flatten)]
    pub outcome: VerificationOutcome,
}

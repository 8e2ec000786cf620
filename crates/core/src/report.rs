//! Human-readable rendering of discovery results

use std::collections::BTreeMap;
use std::fmt::Write;

use crate::candidates::{CandidateKind, RelationshipCandidate};
use crate::overlap::OverlapCandidate;
use crate::verify::{VerificationOutcome, VerificationReport};

/// Render naming/path candidates grouped by source schema.
///
/// Each line carries a confirmation marker, the field or relation label,
/// the declared type, the inferred target, and the evidence source tag.
pub fn render_candidate_report(candidates: &[RelationshipCandidate]) -> String {
    let mut by_source: BTreeMap<&str, Vec<&RelationshipCandidate>> = BTreeMap::new();
    for candidate in candidates {
        by_source.entry(&candidate.from).or_default().push(candidate);
    }

    let mut out = String::new();
    for (source, items) in by_source {
        let _ = writeln!(out, "Schema: {source}");
        for item in items {
            let marker = if item.confirmed_by_path { "✓" } else { " " };
            match item.kind {
                CandidateKind::ApiPathOnly => {
                    let target = item.to.as_deref().unwrap_or("(unresolved)");
                    let _ = writeln!(
                        out,
                        "  {marker} relationship: {target:<30}  (detected from API paths only)"
                    );
                }
                CandidateKind::NamedField => {
                    let field = item.field.as_deref().unwrap_or_default();
                    let ty = item.property_type.as_deref().unwrap_or("N/A");
                    let target = item.to.as_deref().unwrap_or("(unresolved)");
                    let _ = writeln!(
                        out,
                        "  {marker} field: {field:<30}  type: {ty:<8}  -> {target}  (source: {})",
                        item.evidence()
                    );
                }
            }
        }
        out.push('\n');
    }
    out
}

/// Render value-overlap candidates, one block per candidate, in their
/// ranked order.
pub fn render_overlap_report(candidates: &[OverlapCandidate]) -> String {
    let mut out = String::new();
    for candidate in candidates {
        let _ = writeln!(
            out,
            "{}.{}  ->  {}  (matches: {})  name_match={}",
            candidate.from, candidate.field, candidate.to, candidate.match_count,
            candidate.name_match
        );
        let _ = writeln!(out, "  sample matches: {:?}\n", candidate.sample_matches);
    }
    out
}

/// Render verification outcomes with status markers and orphan/match
/// samples.
pub fn render_verification_report(reports: &[VerificationReport]) -> String {
    let mut out = String::new();
    for report in reports {
        let check = &report.check;
        let label = format!("{}.{} → {}", check.source, check.field, check.target);
        match &report.outcome {
            VerificationOutcome::NoSourceData => {
                let _ = writeln!(out, "⚠ {label}: No source data\n");
            }
            VerificationOutcome::NoTargetIdentifiers => {
                let _ = writeln!(out, "⚠ {label}: No target IDs\n");
            }
            VerificationOutcome::AllValuesNull { null_count } => {
                let _ = writeln!(
                    out,
                    "⚠ {label}: All values are NULL ({null_count} records)\n"
                );
            }
            VerificationOutcome::Verified(result) => {
                let _ = writeln!(out, "{} {label}:", result.status.marker());
                let _ = writeln!(
                    out,
                    "    {} FK values, {} NULLs",
                    result.total_values, result.null_count
                );
                let _ = writeln!(
                    out,
                    "    {}/{} unique values match target IDs ({:.1}%)",
                    result.matched_count, result.unique_value_count, result.match_pct
                );
                if !result.orphan_samples.is_empty() {
                    let _ = writeln!(
                        out,
                        "    ⚠ Orphaned FK values (no matching target): {:?}",
                        result.orphan_samples
                    );
                }
                if !result.match_samples.is_empty() {
                    let _ = writeln!(
                        out,
                        "    Sample matching IDs: {:?}",
                        result.match_samples
                    );
                }
                out.push('\n');
            }
        }
    }
    out
}

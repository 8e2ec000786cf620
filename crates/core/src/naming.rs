//! Identifier normalization and name-matching heuristics
//!
//! Every fuzzy comparison in the engine reduces names to a canonical
//! lowercase alphanumeric form first, so `Building_Id`, `buildingid` and
//! `BuildingID` compare equal.

/// Canonicalize an identifier for fuzzy comparison.
///
/// Lowercases the input and removes every character that is not an ASCII
/// letter or digit. Idempotent: `normalize(normalize(x)) == normalize(x)`.
pub fn normalize(name: &str) -> String {
    name.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Check whether two already-canonical names refer to the same concept.
///
/// True when either form contains the other. Deliberately permissive:
/// `assetid` overlaps `asset`, `buildingid` overlaps `buildings`.
pub fn canonical_overlap(a: &str, b: &str) -> bool {
    if a.is_empty() || b.is_empty() {
        return false;
    }
    a.contains(b) || b.contains(a)
}

/// Canonical containment test on raw (un-normalized) names.
pub fn names_overlap(a: &str, b: &str) -> bool {
    canonical_overlap(&normalize(a), &normalize(b))
}

/// True when a property name carries an `id` marker anywhere in it.
pub fn has_id_marker(name: &str) -> bool {
    name.to_ascii_lowercase().contains("id")
}

/// Strip a trailing `_id` / `Id` (case-insensitive) from a property name.
///
/// Returns `None` when the name carries no such suffix.
pub fn strip_id_suffix(name: &str) -> Option<&str> {
    let lower = name.to_ascii_lowercase();
    if let Some(stem) = lower.strip_suffix("_id") {
        return Some(&name[..stem.len()]);
    }
    let stem = lower.strip_suffix("id")?;
    Some(&name[..stem.len()])
}

/// The opposite-number form of a canonical name stem: the singular when the
/// stem is plural, the plural otherwise.
pub fn number_variant(stem: &str) -> String {
    match stem.strip_suffix('s') {
        Some(singular) => singular.to_string(),
        None => format!("{stem}s"),
    }
}

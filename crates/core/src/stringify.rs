//! Canonical stringification of heterogeneous JSON values
//!
//! Set-membership comparison across collections needs a single string form
//! per logical value: the integer `7` and the string `"7"` must land on the
//! same key, and a nested identifier-bearing object must collapse to its
//! identifier. All type-coercion policy lives here.

use serde_json::Value;

/// Marker returned for JSON `null`. Stable across calls and distinct from
/// the stringified form of any identifier value.
pub const NULL_SENTINEL: &str = "<null>";

/// Identifier-like keys probed, in priority order, when stringifying a
/// nested object.
const ID_PROBE_KEYS: [&str; 8] = [
    "id",
    "_id",
    "Id",
    "ID",
    "serial_number",
    "asset_rfid_tag",
    "rfid",
    "serial",
];

/// Convert a JSON value into its canonical string form.
///
/// Total and deterministic: the same input always yields the same output.
/// Objects collapse to the first present non-null identifier-like value;
/// objects without one, and arrays, serialize to JSON text (serde_json's
/// default map keeps keys sorted, so structurally identical objects
/// stringify identically).
pub fn stringify(value: &Value) -> String {
    match value {
        Value::Null => NULL_SENTINEL.to_string(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Object(map) => {
            for key in ID_PROBE_KEYS {
                if let Some(v) = map.get(key)
                    && !v.is_null()
                {
                    return stringify(v);
                }
            }
            value.to_string()
        }
        Value::Array(_) => value.to_string(),
    }
}

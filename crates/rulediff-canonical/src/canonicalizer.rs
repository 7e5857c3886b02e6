use serde_json::Value;

/// Error returned when an export document cannot be read.
#[derive(thiserror::Error, Debug)]
pub enum CanonicalError {
    /// Input text is not valid JSON.
    #[error("malformed input: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Parses an export document from text.
///
/// Parsing fails as a whole; no partial value is ever produced.
pub fn parse_document(text: &str) -> Result<Value, CanonicalError> {
    Ok(serde_json::from_str(text)?)
}

/// Recursively normalizes a JSON value into canonical element order.
///
/// Object keys are never renamed and never reordered here: serde_json's
/// default object map is BTreeMap-backed, so every serialization already
/// visits keys in ascending ordinal order. Key order is a serialization-time
/// policy, which leaves this function with one job: establish array element
/// order. Elements are canonicalized bottom-up, then stable-sorted by their
/// own canonical compact text, so arrays of scalars sort by value and arrays
/// of objects sort by their full canonical serialization. Equal elements keep
/// their input order.
///
/// Scalars pass through unchanged, as do empty arrays and objects and `null`.
/// Nothing is dropped at this stage.
pub fn canonicalize(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            Value::Object(map.into_iter().map(|(k, v)| (k, canonicalize(v))).collect())
        }
        Value::Array(items) => {
            let mut items: Vec<Value> = items.into_iter().map(canonicalize).collect();
            items.sort_by_cached_key(|item| canonical_text(item));
            Value::Array(items)
        }
        scalar => scalar,
    }
}

/// Compact canonical serialization of a value.
///
/// Doubles as the array sort key in [`canonicalize`] and as the
/// byte-comparison form for equivalence checks.
pub fn canonical_text(value: &Value) -> String {
    // Serializing a Value cannot fail: object keys are strings by construction.
    serde_json::to_string(value).unwrap_or_default()
}

/// Indented canonical serialization, the on-disk document format.
pub fn to_pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_default()
}

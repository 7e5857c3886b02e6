use serde_json::Value;

use crate::walker::RuleKind;

/// Sentinel written over volatile identifier fields.
pub const IDENTIFIER_SENTINEL: &str = "GUID";

fn volatile_fields(kind: RuleKind) -> &'static [&'static str] {
    match kind {
        // Custom rules carry both identifiers; standard rules only the
        // environment-assigned one.
        RuleKind::Custom => &["internalIdentifier", "uniqueIdentifier"],
        RuleKind::Standard => &["uniqueIdentifier"],
    }
}

/// Overwrites a rule document's volatile identifiers with the sentinel.
///
/// Fields absent from the document stay absent; scrubbing never adds fields.
/// Must run after canonicalization and immediately before serialization: the
/// sentinel must not participate in element ordering, which was decided from
/// the original identifier values. Scrub-then-serialize, never
/// scrub-then-resort.
pub fn scrub_rule(rule: &mut Value, kind: RuleKind) {
    if let Some(object) = rule.as_object_mut() {
        for field in volatile_fields(kind) {
            if let Some(slot) = object.get_mut(*field) {
                *slot = Value::String(IDENTIFIER_SENTINEL.to_string());
            }
        }
    }
}

use crate::walker::RuleKind;

/// Characters never allowed in output file names.
const FORBIDDEN: &[char] = &['\\', '/', '*', ':', '?', '<', '>', '|'];

/// Strips file-system-hostile characters from a display name.
///
/// Removal only, no substitution: `"A/B:C"` becomes `"ABC"`. No case folding,
/// no trimming, no length limit. Collisions between sanitized names are the
/// caller's to detect.
pub fn sanitize_name(raw: &str) -> String {
    raw.chars().filter(|c| !FORBIDDEN.contains(c)).collect()
}

/// Composite file stem for one extracted rule:
/// `"<containerLabel> - <CUSTOM|DEFAULT> - <rule name>"`, sanitized as a whole.
pub fn rule_file_stem(container_label: &str, kind: RuleKind, rule_name: &str) -> String {
    sanitize_name(&format!(
        "{} - {} - {}",
        container_label,
        kind.file_tag(),
        rule_name
    ))
}

use regex::Regex;

use crate::errors::SnapshotError;

/// Line prefix opening one rule block in an export file.
const RULE_MARKER: &str = "New-SynchronizationRule";

/// One rule's contiguous lines from a rule-export text file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleBlock {
    /// Display name from the block's `-Name '...'` argument.
    pub name: String,
    /// Full block text, marker line included.
    pub body: String,
}

/// Splits a rule-export text file into per-rule blocks.
///
/// A block runs from a line whose trimmed text starts with the rule marker to
/// the line before the next marker (or end of input). Text before the first
/// marker is exporter preamble and is dropped. Exported names are
/// single-quoted and never contain a quote themselves.
pub fn split_export(text: &str) -> Result<Vec<RuleBlock>, SnapshotError> {
    let name_re = Regex::new(r"-Name\s+'([^']*)'").expect("invalid regex");

    let mut blocks: Vec<(usize, Vec<&str>)> = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        if line.trim_start().starts_with(RULE_MARKER) {
            blocks.push((idx + 1, Vec::new()));
        }
        if let Some((_, current)) = blocks.last_mut() {
            current.push(line);
        }
    }
    if blocks.is_empty() {
        return Err(SnapshotError::NoRuleBlocks);
    }

    blocks
        .into_iter()
        .map(|(start_line, lines)| {
            let body = lines.join("\n");
            let name = name_re
                .captures(&body)
                .map(|captures| captures[1].to_string())
                .ok_or(SnapshotError::UnnamedBlock(start_line))?;
            Ok(RuleBlock { name, body })
        })
        .collect()
}

use std::path::PathBuf;

use rulediff_canonical::{canonicalize, parse_document, CanonicalError};
use rulediff_policy::{
    extract_rules, rule_file_stem, sanitize_name, scrub_rule, skeleton, PolicyError,
};

use crate::errors::SnapshotError;
use crate::splitter::split_export;
use crate::writer::{RunReport, SnapshotWriter, SKELETON_STEM};

/// Errors that abort a decompose run before any file is written.
#[derive(thiserror::Error, Debug)]
pub enum DecomposeError {
    /// Input text failed to parse as JSON.
    #[error(transparent)]
    Canonical(#[from] CanonicalError),
    /// Document shape does not match the export schema.
    #[error(transparent)]
    Policy(#[from] PolicyError),
    /// Output directory lifecycle failed.
    #[error(transparent)]
    Snapshot(#[from] SnapshotError),
}

/// Runs the full decomposition pipeline over one policy export document.
///
/// Parsing, canonicalization, and rule extraction all complete before the
/// output directory is touched, so malformed input never leaves a
/// half-cleared directory behind. After that point, per-rule collisions and
/// write failures are collected in the returned [`RunReport`] instead of
/// aborting the run.
///
/// Each rule is scrubbed after the canonical element order has been decided
/// and is serialized without re-canonicalization.
pub fn decompose(text: &str, out_dir: PathBuf) -> Result<RunReport, DecomposeError> {
    let config = canonicalize(parse_document(text)?);
    let rules = extract_rules(&config)?;
    let skeleton_doc = skeleton(&config)?;

    let mut writer = SnapshotWriter::create(out_dir)?;
    for mut rule in rules {
        scrub_rule(&mut rule.document, rule.kind);
        let stem = rule_file_stem(&rule.container_label, rule.kind, &rule.name);
        writer.write_document(&stem, &rule.document);
    }
    writer.write_document(SKELETON_STEM, &skeleton_doc);
    Ok(writer.finish())
}

/// Splits one rule-export text file into per-rule files.
///
/// Same directory lifecycle and collision/failure collection as
/// [`decompose`]; splitting and name extraction complete before the output
/// directory is touched.
pub fn split_to_files(text: &str, out_dir: PathBuf) -> Result<RunReport, SnapshotError> {
    let blocks = split_export(text)?;

    let mut writer = SnapshotWriter::create(out_dir)?;
    for block in blocks {
        writer.write_text(&sanitize_name(&block.name), &block.body);
    }
    Ok(writer.finish())
}

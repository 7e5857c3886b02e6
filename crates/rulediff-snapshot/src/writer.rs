use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::Value;

use rulediff_canonical::to_pretty;

use crate::errors::SnapshotError;

/// Suffix appended to an input file name to derive its snapshot directory.
pub const OUTPUT_DIR_SUFFIX: &str = "-decomposed";
/// Suffix used by the rule-export splitter.
pub const SPLIT_DIR_SUFFIX: &str = "-split";
/// File stem of the skeleton document.
pub const SKELETON_STEM: &str = "_config";

/// Derives the snapshot directory for a policy export file.
pub fn output_dir_for(input: &Path) -> PathBuf {
    dir_with_suffix(input, OUTPUT_DIR_SUFFIX)
}

/// Derives the output directory for a split rule export.
pub fn split_dir_for(input: &Path) -> PathBuf {
    dir_with_suffix(input, SPLIT_DIR_SUFFIX)
}

fn dir_with_suffix(input: &Path, suffix: &str) -> PathBuf {
    let mut name = input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    name.push_str(suffix);
    input.with_file_name(name)
}

/// One file that could not be written.
#[derive(Debug, Clone, Serialize)]
pub struct WriteFailure {
    /// File name relative to the snapshot directory.
    pub file: String,
    /// Error text from the failed write.
    pub error: String,
}

/// Aggregate result of one snapshot run.
///
/// Collisions and write failures are collected here rather than aborting the
/// run; the caller reports them after every rule has been attempted.
#[derive(Debug, Default, Serialize)]
pub struct RunReport {
    /// Files successfully written, in write order (rewrites not repeated).
    pub written: Vec<String>,
    /// File names targeted more than once in this run; last write wins.
    pub collisions: Vec<String>,
    /// Writes that failed; the run continued past them.
    pub failures: Vec<WriteFailure>,
}

impl RunReport {
    /// Number of distinct files on disk after the run.
    pub fn files_written(&self) -> usize {
        self.written.len()
    }

    /// True when the run finished without collisions or failures.
    pub fn is_clean(&self) -> bool {
        self.collisions.is_empty() && self.failures.is_empty()
    }
}

/// Writes one snapshot directory, tracking collisions and write failures.
pub struct SnapshotWriter {
    dir: PathBuf,
    seen: BTreeSet<String>,
    report: RunReport,
}

impl SnapshotWriter {
    /// Clears `dir` (removing every existing entry) and recreates it, then
    /// opens a writer over it. Re-running a pipeline is idempotent because of
    /// this clearing step.
    pub fn create(dir: PathBuf) -> Result<Self, SnapshotError> {
        if dir.exists() {
            fs::remove_dir_all(&dir)?;
        }
        fs::create_dir_all(&dir)?;
        Ok(Self {
            dir,
            seen: BTreeSet::new(),
            report: RunReport::default(),
        })
    }

    /// Directory this writer populates.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Writes one JSON document as `<stem>.json` in canonical indented form.
    pub fn write_document(&mut self, stem: &str, document: &Value) {
        let mut text = to_pretty(document);
        text.push('\n');
        self.write_bytes(format!("{}.json", stem), text.into_bytes());
    }

    /// Writes one text body as `<stem>.txt`.
    pub fn write_text(&mut self, stem: &str, body: &str) {
        let mut text = body.to_string();
        if !text.ends_with('\n') {
            text.push('\n');
        }
        self.write_bytes(format!("{}.txt", stem), text.into_bytes());
    }

    fn write_bytes(&mut self, file: String, bytes: Vec<u8>) {
        let first = self.seen.insert(file.clone());
        if !first {
            self.report.collisions.push(file.clone());
        }
        match fs::write(self.dir.join(&file), bytes) {
            Ok(()) => {
                if first {
                    self.report.written.push(file);
                }
            }
            Err(err) => self.report.failures.push(WriteFailure {
                file,
                error: err.to_string(),
            }),
        }
    }

    /// Consumes the writer and returns the aggregate report.
    pub fn finish(self) -> RunReport {
        self.report
    }
}

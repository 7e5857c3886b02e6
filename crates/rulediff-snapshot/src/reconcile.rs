use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Serialize;

use rulediff_canonical::Digest;

use crate::errors::SnapshotError;

/// Set-difference between two snapshot directories.
#[derive(Debug, Default, Serialize)]
pub struct Reconciliation {
    /// File names present only in the left snapshot, sorted.
    pub only_left: Vec<String>,
    /// File names present only in the right snapshot, sorted.
    pub only_right: Vec<String>,
    /// Names present in both whose content digests differ, sorted.
    pub changed: Vec<String>,
    /// Count of names present in both with equal digests.
    pub unchanged: usize,
}

impl Reconciliation {
    /// True when both snapshots hold identical content.
    pub fn is_identical(&self) -> bool {
        self.only_left.is_empty() && self.only_right.is_empty() && self.changed.is_empty()
    }
}

/// Compares the regular files of two snapshot directories by content digest.
///
/// Non-recursive; subdirectories and non-file entries are ignored. Name lists
/// come out sorted because enumeration goes through a BTreeMap.
pub fn reconcile_dirs(left: &Path, right: &Path) -> Result<Reconciliation, SnapshotError> {
    let left_files = digest_dir(left)?;
    let right_files = digest_dir(right)?;

    let mut out = Reconciliation::default();
    for (name, digest) in &left_files {
        match right_files.get(name) {
            None => out.only_left.push(name.clone()),
            Some(other) if other != digest => out.changed.push(name.clone()),
            Some(_) => out.unchanged += 1,
        }
    }
    for name in right_files.keys() {
        if !left_files.contains_key(name) {
            out.only_right.push(name.clone());
        }
    }
    Ok(out)
}

fn digest_dir(dir: &Path) -> Result<BTreeMap<String, Digest>, SnapshotError> {
    if !dir.is_dir() {
        return Err(SnapshotError::NotADirectory(dir.display().to_string()));
    }
    let mut files = BTreeMap::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let bytes = fs::read(entry.path())?;
        files.insert(
            entry.file_name().to_string_lossy().into_owned(),
            Digest::of_bytes(&bytes),
        );
    }
    Ok(files)
}

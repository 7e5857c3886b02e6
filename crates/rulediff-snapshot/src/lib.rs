//! Snapshot output for decomposed identity-sync configuration exports.
//!
//! This crate owns everything that touches the filesystem: the
//! cleared-before-each-run output directory, per-rule document writes with
//! collision and failure tracking, the end-to-end decompose and split
//! pipelines, and the set-difference reconciliation of two snapshot
//! directories.
//!
#![deny(missing_docs)]

/// Error types for snapshot operations.
pub mod errors;
/// End-to-end decompose and split pipelines.
pub mod pipeline;
/// Two-snapshot set-difference reconciliation.
pub mod reconcile;
/// Line-oriented rule-export splitting.
pub mod splitter;
/// Snapshot directory lifecycle and document writing.
pub mod writer;

pub use errors::SnapshotError;
pub use pipeline::{decompose, split_to_files, DecomposeError};
pub use reconcile::{reconcile_dirs, Reconciliation};
pub use splitter::{split_export, RuleBlock};
pub use writer::{
    output_dir_for, split_dir_for, RunReport, SnapshotWriter, WriteFailure, SKELETON_STEM,
};

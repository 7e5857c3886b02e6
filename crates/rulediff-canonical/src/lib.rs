//! Canonical-form primitives for identity-sync configuration snapshots.
//!
//! A configuration export carries two kinds of environment noise: object keys
//! and array elements arrive in whatever order the exporting service produced
//! them, and volatile identifiers differ per environment. This crate handles
//! the first kind: it normalizes any JSON tree into a deterministic element
//! order so that structurally-equivalent documents serialize to identical
//! bytes and can be compared with a plain text diff.
//!
#![deny(missing_docs)]

/// Canonicalization of JSON configuration trees.
pub mod canonicalizer;
/// Content digests for snapshot reconciliation.
pub mod digest;

pub use canonicalizer::{canonical_text, canonicalize, parse_document, to_pretty, CanonicalError};
pub use digest::{Digest, DigestAlg};

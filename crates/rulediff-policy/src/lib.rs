//! Directory-policy schema walking for identity-sync configuration exports.
//!
//! An export holds directory policy containers (several on-premises forests,
//! one cloud tenant), each carrying a custom and a standard rule collection.
//! This crate locates every rule in a canonicalized export, scrubs the
//! volatile identifiers that differ per environment, produces the residual
//! skeleton document, and maps rule names to file-system-safe output names.
//!
//! Rules are opaque here: nothing in this crate interprets attribute flows,
//! precedence, or enablement.
//!
#![deny(missing_docs)]

/// Errors raised while walking an export document.
pub mod errors;
/// File-name sanitization and composite output naming.
pub mod sanitize;
/// Volatile-identifier scrubbing.
pub mod scrub;
/// Rule extraction and skeleton production.
pub mod walker;

pub use errors::PolicyError;
pub use sanitize::{rule_file_stem, sanitize_name};
pub use scrub::{scrub_rule, IDENTIFIER_SENTINEL};
pub use walker::{extract_rules, skeleton, ExtractedRule, RuleKind, CLOUD_LABEL};

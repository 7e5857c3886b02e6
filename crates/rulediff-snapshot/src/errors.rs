use thiserror::Error;

/// Errors that can occur during snapshot operations.
#[derive(Error, Debug)]
pub enum SnapshotError {
    /// I/O error during directory lifecycle or reading.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// A reconciliation side is not a directory.
    #[error("not a directory: {0}")]
    NotADirectory(String),
    /// A rule-export file contains no rule blocks at all.
    #[error("no rule blocks found in export")]
    NoRuleBlocks,
    /// A rule block carries no name line.
    #[error("rule block starting at line {0} has no -Name line")]
    UnnamedBlock(usize),
}

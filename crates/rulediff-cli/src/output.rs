//! Output formatting utilities.

use std::path::Path;

use rulediff_snapshot::{Reconciliation, RunReport};

/// Prints the end-of-run summary for a snapshot run, warnings last.
pub fn print_run_summary(dir: &Path, report: &RunReport) {
    println!("{} files written to {}", report.files_written(), dir.display());
    for name in &report.collisions {
        eprintln!("warning: duplicate output name (last write wins): {}", name);
    }
    for failure in &report.failures {
        eprintln!("warning: failed to write {}: {}", failure.file, failure.error);
    }
}

/// Prints a reconciliation as a simple table.
pub fn print_reconciliation(reconciliation: &Reconciliation) {
    println!("{:<12} {}", "STATUS", "FILE");
    println!("{}", "-".repeat(60));
    for file in &reconciliation.only_left {
        println!("{:<12} {}", "left-only", file);
    }
    for file in &reconciliation.only_right {
        println!("{:<12} {}", "right-only", file);
    }
    for file in &reconciliation.changed {
        println!("{:<12} {}", "changed", file);
    }
    println!("{} unchanged", reconciliation.unchanged);
}

//! Reconcile command implementation.

use std::path::Path;

use rulediff_snapshot::reconcile_dirs;

use crate::output;

pub fn run(left: String, right: String, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let reconciliation = reconcile_dirs(Path::new(&left), Path::new(&right))
        .map_err(|e| format!("Failed to reconcile: {}", e))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&reconciliation)?);
    } else {
        output::print_reconciliation(&reconciliation);
    }

    if !reconciliation.is_identical() {
        std::process::exit(1);
    }
    Ok(())
}

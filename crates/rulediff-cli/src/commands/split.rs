//! Split command implementation.

use std::path::Path;

use rulediff_snapshot::{split_dir_for, split_to_files};

use crate::output;

pub fn run(input: String) -> Result<(), Box<dyn std::error::Error>> {
    let input_path = Path::new(&input);
    if !input_path.is_file() {
        return Err(format!("input not found or not a regular file: {}", input).into());
    }

    let text = std::fs::read_to_string(input_path)
        .map_err(|e| format!("Failed to read file {}: {}", input, e))?;

    let out_dir = split_dir_for(input_path);
    let report = split_to_files(&text, out_dir.clone())
        .map_err(|e| format!("Failed to split {}: {}", input, e))?;

    output::print_run_summary(&out_dir, &report);

    if !report.is_clean() {
        std::process::exit(2);
    }
    Ok(())
}

//! Decompose command implementation.

use std::path::Path;

use rulediff_snapshot::{decompose, output_dir_for};

use crate::output;

pub fn run(input: String, verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let input_path = Path::new(&input);
    if !input_path.is_file() {
        return Err(format!("input not found or not a regular file: {}", input).into());
    }

    let text = std::fs::read_to_string(input_path)
        .map_err(|e| format!("Failed to read file {}: {}", input, e))?;

    let out_dir = output_dir_for(input_path);
    let report = decompose(&text, out_dir.clone())
        .map_err(|e| format!("Failed to decompose {}: {}", input, e))?;

    if verbose {
        for file in &report.written {
            println!("wrote {}", out_dir.join(file).display());
        }
    }
    output::print_run_summary(&out_dir, &report);

    if !report.is_clean() {
        std::process::exit(2);
    }
    Ok(())
}

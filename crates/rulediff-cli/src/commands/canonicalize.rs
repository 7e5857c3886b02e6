//! Canonicalize command implementation.

use rulediff_canonical::{canonicalize, parse_document, to_pretty};
use std::io::{self, Read};

pub fn run(input: Option<String>) -> Result<(), Box<dyn std::error::Error>> {
    // Read JSON from file or stdin
    let json_str = if let Some(path) = input {
        std::fs::read_to_string(&path)
            .map_err(|e| format!("Failed to read file {}: {}", path, e))?
    } else {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        buffer
    };

    let value = parse_document(&json_str).map_err(|e| format!("Invalid JSON: {}", e))?;
    println!("{}", to_pretty(&canonicalize(value)));
    Ok(())
}

//! Rulediff CLI - decompose identity-sync configuration exports into
//! diff-friendly per-rule files.

use clap::{Parser, Subcommand};

mod commands;
mod output;

use commands::{canonicalize, decompose, reconcile, split};

#[derive(Parser)]
#[command(name = "rulediff")]
#[command(about = "Decompose identity-sync configuration exports for diffing")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decompose a full-policy JSON export into per-rule files plus a skeleton
    Decompose {
        /// Path to the exported policy JSON file
        input: String,
        /// List each file as it is written
        #[arg(long)]
        verbose: bool,
    },
    /// Split a rule-export text file into one file per rule
    Split {
        /// Path to the exported rules text file
        input: String,
    },
    /// Compare two snapshot directories by file set and content
    Reconcile {
        /// Left snapshot directory
        left: String,
        /// Right snapshot directory
        right: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the canonical form of a JSON document
    Canonicalize {
        /// Input JSON file (or stdin if not provided)
        input: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Decompose { input, verbose } => decompose::run(input, verbose),
        Commands::Split { input } => split::run(input),
        Commands::Reconcile { left, right, json } => reconcile::run(left, right, json),
        Commands::Canonicalize { input } => canonicalize::run(input),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

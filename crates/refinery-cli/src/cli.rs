//! CLI argument definitions using clap.

use clap::{ArgAction, Parser, Subcommand};
use refinery::ElementKind;
use std::path::PathBuf;

/// Refinery: normalize messy column values in CSV/TSV files
#[derive(Parser)]
#[command(name = "refinery")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List available transformations and their parameters
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Apply a transformation to one column and write the table
    Apply {
        /// Path to the data file (CSV/TSV)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Column to transform (after --fix-names, use the new name)
        #[arg(short, long)]
        column: String,

        /// Transformation key (see `refinery list`)
        #[arg(short, long)]
        transform: String,

        /// Transformation parameter, e.g. "title" or "state_code"
        #[arg(short, long)]
        param: Option<String>,

        /// Cast the column to this kind first (text, integer, nullable_integer,
        /// float, boolean, timestamp, categorical)
        #[arg(short, long, value_name = "KIND")]
        kind: Option<ElementKind>,

        /// Rewrite the header in snake_case before transforming
        #[arg(long)]
        fix_names: bool,

        /// Output path (default: <file>_refined.<ext>)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// JSON configuration file for numeric and date parsing
        #[arg(long, value_name = "JSON")]
        config: Option<PathBuf>,
    },

    /// Show (and optionally write) the header rewritten in snake_case
    Names {
        /// Path to the data file (CSV/TSV)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Write the table with the new header to this path
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show column statistics
    Inspect {
        /// Path to the data file (CSV/TSV)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Only inspect this column
        #[arg(short, long)]
        column: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

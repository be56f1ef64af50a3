//! Refinery CLI - column normalization for CSV/TSV files.

mod cli;
mod commands;
mod error;
mod loader;
mod logging;

use clap::Parser;
use cli::{Cli, Commands};
use colored::Colorize;

use commands::apply::ApplyArgs;

fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    let result = match cli.command {
        Commands::List { json } => commands::list::run(json),

        Commands::Apply {
            file,
            column,
            transform,
            param,
            kind,
            fix_names,
            output,
            config,
        } => commands::apply::run(ApplyArgs {
            file,
            column,
            transform,
            param,
            kind,
            fix_names,
            output,
            config,
        }),

        Commands::Names { file, output } => commands::names::run(file, output),

        Commands::Inspect { file, column, json } => commands::inspect::run(file, column, json),
    };

    if let Err(e) = result {
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

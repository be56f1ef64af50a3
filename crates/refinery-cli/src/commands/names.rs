//! Names command - rewrite the header in snake_case.

use std::path::PathBuf;

use colored::Colorize;
use refinery::fix_column_names;

use crate::error::Result;
use crate::loader::Table;

pub fn run(file: PathBuf, output: Option<PathBuf>) -> Result<()> {
    let mut table = Table::load(&file)?;
    let headers = table.headers();

    let result = fix_column_names(&headers);
    let width = headers.iter().map(|h| h.chars().count()).max().unwrap_or(0);

    for (before, after) in headers.iter().zip(result.output()) {
        if before == after {
            println!("  {:width$}   {}", before, after.dimmed(), width = width);
        } else {
            println!("  {:width$} → {}", before, after.green(), width = width);
        }
    }
    println!();
    println!("{}", result.message());

    if let Some(path) = output {
        table.rename_all(result.output());
        table.write(&path)?;
        println!(
            "{} {}",
            "Saved to".cyan().bold(),
            path.display().to_string().white()
        );
    }

    Ok(())
}

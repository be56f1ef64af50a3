//! Inspect command - describe columns.

use std::path::PathBuf;

use colored::Colorize;
use refinery::{Column, ColumnStatistics};
use serde::Serialize;

use crate::error::Result;
use crate::loader::Table;

#[derive(Serialize)]
struct ColumnReport {
    name: String,
    #[serde(flatten)]
    statistics: ColumnStatistics,
}

pub fn run(file: PathBuf, column: Option<String>, json_output: bool) -> Result<()> {
    let table = Table::load(&file)?;

    let selected: Vec<&Column> = match &column {
        Some(name) => vec![table.column(name)?],
        None => table.columns().iter().collect(),
    };

    let reports: Vec<ColumnReport> = selected
        .into_iter()
        .map(|c| ColumnReport {
            name: c.name().to_string(),
            statistics: c.statistics(),
        })
        .collect();

    if json_output {
        println!("{}", serde_json::to_string_pretty(&reports)?);
        return Ok(());
    }

    println!(
        "{} {} ({} rows, {} columns)",
        "Inspecting".cyan().bold(),
        file.display().to_string().white(),
        table.row_count(),
        table.columns().len()
    );

    for report in &reports {
        let stats = &report.statistics;
        println!();
        println!("{} {}", report.name.green().bold(), format!("[{}]", stats.kind).dimmed());
        println!("  Non-null: {}", stats.non_null_count());
        println!(
            "  Null:     {} ({:.1}%)",
            if stats.null_count > 0 {
                stats.null_count.to_string().yellow()
            } else {
                stats.null_count.to_string().white()
            },
            stats.null_percentage()
        );
        println!("  Unique:   {}", stats.unique_count);

        if let Some(numeric) = &stats.numeric {
            println!(
                "  Range:    {} to {} (mean {:.2})",
                numeric.min, numeric.max, numeric.mean
            );
        }
        if !stats.sample_values.is_empty() {
            println!("  Samples:  {}", stats.sample_values.join(", ").dimmed());
        }
    }

    Ok(())
}

//! Apply command - run one transformation over one column and export the table.

use std::fs;
use std::path::{Path, PathBuf};

use colored::Colorize;
use refinery::{Column, ElementKind, Refinery, RefineryConfig, Transformed};

use crate::error::{CliError, Result};
use crate::loader::Table;

pub struct ApplyArgs {
    pub file: PathBuf,
    pub column: String,
    pub transform: String,
    pub param: Option<String>,
    pub kind: Option<ElementKind>,
    pub fix_names: bool,
    pub output: Option<PathBuf>,
    pub config: Option<PathBuf>,
}

pub fn run(args: ApplyArgs) -> Result<()> {
    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => RefineryConfig::default(),
    };
    let refinery = Refinery::with_config(config);

    let mut table = Table::load(&args.file)?;

    if args.fix_names {
        let renamed = refinery.fix_column_names(&table.headers());
        println!("{} {}", "Names:".cyan().bold(), renamed.message());
        table.rename_all(renamed.output());
    }

    let index = table.position(&args.column)?;
    let result = refine_column(
        &refinery,
        &table.columns()[index],
        args.kind,
        &args.transform,
        args.param.as_deref(),
    )?;

    if result.is_applied() {
        println!("{} {}", "Applied:".green().bold(), result.message());
    } else {
        println!("{} {}", "Warning:".yellow().bold(), result.message());
    }

    table.replace(index, result.into_output());

    let output_path = args.output.unwrap_or_else(|| default_output_path(&args.file));
    table.write(&output_path)?;

    println!(
        "{} {} rows to {}",
        "Saved".cyan().bold(),
        table.row_count().to_string().white().bold(),
        output_path.display().to_string().white()
    );

    Ok(())
}

/// Cast the column to `kind` when given, then run the transformation.
fn refine_column(
    refinery: &Refinery,
    column: &Column,
    kind: Option<ElementKind>,
    transform: &str,
    param: Option<&str>,
) -> Result<Transformed> {
    let Some(kind) = kind else {
        return Ok(refinery.apply(transform, column, param)?);
    };

    let cast = column.cast_with(kind, &refinery.config().dates)?;
    println!(
        "{} column '{}' from {} to {}",
        "Cast:".cyan().bold(),
        column.name(),
        column.kind(),
        kind
    );
    Ok(refinery.apply(transform, &cast, param)?)
}

fn load_config(path: &Path) -> Result<RefineryConfig> {
    let json = fs::read_to_string(path).map_err(|e| CliError::io(path, e))?;
    Ok(RefineryConfig::from_json(&json)?)
}

/// `data/people.csv` becomes `data/people_refined.csv`.
fn default_output_path(file: &Path) -> PathBuf {
    let stem = file.file_stem().unwrap_or_default().to_string_lossy();
    let ext = file
        .extension()
        .map(|e| e.to_string_lossy().into_owned())
        .unwrap_or_else(|| "csv".to_string());
    file.with_file_name(format!("{}_refined.{}", stem, ext))
}

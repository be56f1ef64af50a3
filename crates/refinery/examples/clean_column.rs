//! Example: Run every transformation in the catalog over a sample column.
//!
//! Usage:
//!   cargo run --example clean_column -- <value> [<value> ...]
//!
//! Example:
//!   cargo run --example clean_column -- "  new york " '$1,200.50' 12/25/2024

use std::env;

use refinery::{Column, Refinery};

fn main() -> refinery::Result<()> {
    let values: Vec<String> = env::args().skip(1).collect();

    if values.is_empty() {
        eprintln!("Usage: cargo run --example clean_column -- <value> [<value> ...]");
        eprintln!("\nExample:");
        eprintln!("  cargo run --example clean_column -- \"  new york \" '$1,200.50' 12/25/2024");
        std::process::exit(1);
    }

    let column = Column::from_strings("sample", values);
    let refinery = Refinery::new();

    let separator = "=".repeat(80);
    println!("{}", separator);
    println!("Input: {:?}", column.values());
    println!("{}", separator);

    for spec in refinery.catalog().specs() {
        println!();
        println!("## {} ({})", spec.display_name, spec.key);

        for parameter in spec.parameter_keys() {
            let result = refinery.apply(&spec.key, &column, Some(parameter))?;
            let rendered: Vec<String> = result.output().iter().map(|v| v.to_string()).collect();
            println!(
                "  {:12} {:>16} {:?}",
                parameter,
                result.output().kind(),
                rendered
            );
        }
    }

    Ok(())
}

//! List command - show the transformation catalog.

use colored::Colorize;
use refinery::Registry;

use crate::error::Result;

pub fn run(json_output: bool) -> Result<()> {
    let registry = Registry::standard();

    if json_output {
        println!("{}", registry.to_json()?);
        return Ok(());
    }

    println!(
        "{} {} transformations",
        "Available:".cyan().bold(),
        registry.len().to_string().white().bold()
    );

    for spec in registry.specs() {
        println!();
        println!("{} {}", spec.key.green().bold(), format!("({})", spec.display_name).dimmed());
        println!("  {}", spec.description);

        let marker = if spec.requires_parameter { "required" } else { "optional" };
        println!("  {} {}", "Parameter:".yellow(), marker);

        for (key, description) in &spec.parameter_menu {
            let default = spec.default_parameter.as_deref() == Some(key.as_str());
            let label = if default {
                format!("{} (default)", key).white().bold()
            } else {
                key.white()
            };
            println!("    {:24} {}", label, description.dimmed());
        }
    }

    Ok(())
}

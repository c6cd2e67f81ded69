//! Validate a level spec.

use anyhow::{Context, Result};
use colored::Colorize;
use stratalog_core::LevelTable;
use stratalog_types::LogConfig;

pub fn execute(config: &LogConfig) -> Result<()> {
    let table = LevelTable::parse(&config.loglevel)
        .with_context(|| format!("Invalid level spec '{}'", config.loglevel))?;

    println!(
        "{} level spec with {} entries",
        "Valid".green().bold(),
        table.len()
    );

    for (component, level) in table.iter() {
        let name = if component.is_empty() { "(default)" } else { component };
        println!("  {:<24} {}", name, level.to_string().cyan());
    }

    Ok(())
}

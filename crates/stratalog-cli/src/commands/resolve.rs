//! Show effective levels for components.

use anyhow::{Context, Result};
use stratalog_core::LevelTable;
use stratalog_types::LogConfig;

pub fn execute(config: &LogConfig, components: &[String]) -> Result<()> {
    let table = LevelTable::parse(&config.loglevel)
        .with_context(|| format!("Invalid level spec '{}'", config.loglevel))?;

    for component in components {
        println!("{}\t{}", component, table.resolve(component));
    }

    Ok(())
}

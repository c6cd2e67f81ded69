//! Emit a log line through a component logger.

use anyhow::{Context, Result};
use stratalog_core::global;
use stratalog_types::{LogConfig, Severity};
use tracing::debug;

pub fn execute(config: &LogConfig, component: &str, severity: Severity, message: &str) -> Result<()> {
    global::init(config).context("Failed to initialize logging")?;

    let logger = global::try_get(component)?;
    debug!(
        "Emitting {} for {} (effective level {})",
        severity,
        component,
        logger.effective_level()
    );

    match severity {
        Severity::Fatal => logger.fatal(message),
        _ => {
            logger.log(severity, message);
        }
    }

    Ok(())
}

//! Process-wide registry.
//!
//! Programs that do not want to pass a [`Registry`] around can use this
//! one. It must be initialized once at startup with [`init`] before any
//! [`get`] call.

use crate::logger::Logger;
use crate::registry::Registry;
use once_cell::sync::Lazy;
use std::sync::Arc;
use stratalog_types::{LogConfig, Result};

static REGISTRY: Lazy<Registry> = Lazy::new(Registry::new);

/// The process-wide registry.
pub fn registry() -> &'static Registry {
    &REGISTRY
}

/// Initialize the process-wide registry from configuration.
pub fn init(config: &LogConfig) -> Result<()> {
    registry().initialize_from_config(config)
}

/// Get or create a handle from the process-wide registry.
///
/// # Panics
///
/// Panics if [`init`] has not succeeded.
pub fn get(name: &str) -> Arc<Logger> {
    registry().get(name)
}

/// Get or create a handle, failing if [`init`] has not succeeded.
pub fn try_get(name: &str) -> Result<Arc<Logger>> {
    registry().try_get(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use stratalog_types::LogError;
    use tempfile::TempDir;

    // The process-wide registry can only be initialized once, so the whole
    // lifecycle lives in one test.
    #[test]
    fn test_global_lifecycle() {
        assert!(matches!(try_get("app"), Err(LogError::NotInitialized)));
        assert!(init(&LogConfig::new("INFO,app=NOPE")).is_err());
        assert!(!registry().is_initialized());

        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("global.log");
        init(&LogConfig::new("SEVERE,app=INFO").with_logfile(&path)).unwrap();

        let logger = get("app/worker");
        assert!(Arc::ptr_eq(&logger, &get("app/worker")));
        logger.info("started");

        assert!(matches!(
            init(&LogConfig::new("DEBUG")),
            Err(LogError::AlreadyInitialized)
        ));

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.ends_with(" INFO app/worker started\n"));
    }
}

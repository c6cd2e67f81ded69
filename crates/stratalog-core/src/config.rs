//! Layered logging configuration.
//!
//! The level spec and log file can come from several places. Values are
//! resolved in this priority order:
//! 1. Explicit values (command-line flags)
//! 2. Environment variables (`STRATALOG_LOGLEVEL`, `STRATALOG_LOGFILE`)
//! 3. A YAML configuration file
//! 4. Default values
//!
//! ## Example
//!
//! ```
//! use stratalog_core::config::ConfigLoader;
//!
//! let config = ConfigLoader::new()
//!     .with_env(|_| None)
//!     .with_loglevel("INFO,net=DEBUG")
//!     .load()
//!     .unwrap();
//! assert_eq!(config.loglevel, "INFO,net=DEBUG");
//! ```

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use stratalog_types::{LogConfig, LogError, Result};
use tracing::debug;

/// Environment variable holding the level spec.
pub const ENV_LOGLEVEL: &str = "STRATALOG_LOGLEVEL";

/// Environment variable holding the log file path.
pub const ENV_LOGFILE: &str = "STRATALOG_LOGFILE";

/// Configuration layer priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ConfigLayer {
    /// Default values
    Default = 0,
    /// Values loaded from file
    Loaded = 1,
    /// Values from environment variables
    Environment = 2,
    /// Values given explicitly, usually as flags
    Flags = 3,
}

/// Partial configuration as found in one layer.
#[derive(Debug, Clone, Default, Deserialize)]
struct LayerValues {
    logfile: Option<PathBuf>,
    loglevel: Option<String>,
}

impl LayerValues {
    /// Overwrite with whatever `other` sets.
    fn overlay(&mut self, other: LayerValues) {
        if other.logfile.is_some() {
            self.logfile = other.logfile;
        }
        if other.loglevel.is_some() {
            self.loglevel = other.loglevel;
        }
    }
}

type EnvLookup = Box<dyn Fn(&str) -> Option<String>>;

/// Builds a [`LogConfig`] from defaults, a file, the environment and flags.
pub struct ConfigLoader {
    file: Option<PathBuf>,
    flags: LayerValues,
    env: EnvLookup,
}

impl ConfigLoader {
    /// Create a loader reading the process environment.
    pub fn new() -> Self {
        Self {
            file: None,
            flags: LayerValues::default(),
            env: Box::new(|key: &str| std::env::var(key).ok()),
        }
    }

    /// Read a YAML configuration file. A missing file is an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        self.file = Some(path.as_ref().to_path_buf());
        self
    }

    /// Replace the environment lookup.
    pub fn with_env(mut self, env: impl Fn(&str) -> Option<String> + 'static) -> Self {
        self.env = Box::new(env);
        self
    }

    /// Set the level spec explicitly.
    pub fn with_loglevel(mut self, loglevel: impl Into<String>) -> Self {
        self.flags.loglevel = Some(loglevel.into());
        self
    }

    /// Set the log file explicitly.
    pub fn with_logfile(mut self, logfile: impl Into<PathBuf>) -> Self {
        self.flags.logfile = Some(logfile.into());
        self
    }

    /// Resolve all layers into a configuration.
    ///
    /// The level spec is not parsed here; that happens on initialization.
    pub fn load(&self) -> Result<LogConfig> {
        let mut values = LayerValues::default();

        for layer in [
            ConfigLayer::Default,
            ConfigLayer::Loaded,
            ConfigLayer::Environment,
            ConfigLayer::Flags,
        ] {
            let layer_values = self.layer(layer)?;
            debug!("Config layer {:?}: {:?}", layer, layer_values);
            values.overlay(layer_values);
        }

        let mut config = LogConfig::default();
        if let Some(loglevel) = values.loglevel {
            config.loglevel = loglevel;
        }
        config.logfile = values.logfile;
        Ok(config)
    }

    fn layer(&self, layer: ConfigLayer) -> Result<LayerValues> {
        match layer {
            ConfigLayer::Default => Ok(LayerValues::default()),
            ConfigLayer::Loaded => match &self.file {
                Some(path) => load_file(path),
                None => Ok(LayerValues::default()),
            },
            ConfigLayer::Environment => Ok(LayerValues {
                logfile: (self.env)(ENV_LOGFILE).map(PathBuf::from),
                loglevel: (self.env)(ENV_LOGLEVEL),
            }),
            ConfigLayer::Flags => Ok(self.flags.clone()),
        }
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

fn load_file(path: &Path) -> Result<LayerValues> {
    let content = fs::read_to_string(path).map_err(|e| {
        LogError::Config(format!("Failed to read config file {:?}: {}", path, e))
    })?;

    if content.trim().is_empty() {
        return Ok(LayerValues::default());
    }

    Ok(serde_yaml::from_str(&content)?)
}

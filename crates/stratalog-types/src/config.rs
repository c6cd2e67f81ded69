//! Configuration types and structures.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Logging configuration.
///
/// Holds the raw level spec and the sink destination. The spec is parsed
/// once, when the registry is initialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Log file path; unset or empty means stderr
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logfile: Option<PathBuf>,
    /// Level spec, e.g. `WARNING,net=INFO,net/tcp=DEBUG`
    #[serde(default = "default_loglevel")]
    pub loglevel: String,
}

fn default_loglevel() -> String {
    "FATAL".to_string()
}

impl LogConfig {
    /// Create a configuration from a level spec, writing to stderr.
    pub fn new(loglevel: impl Into<String>) -> Self {
        Self {
            logfile: None,
            loglevel: loglevel.into(),
        }
    }

    /// Set the log file.
    pub fn with_logfile(mut self, logfile: impl Into<PathBuf>) -> Self {
        self.logfile = Some(logfile.into());
        self
    }

    /// Where emitted lines go.
    pub fn sink_target(&self) -> SinkTarget {
        match &self.logfile {
            Some(path) if !path.as_os_str().is_empty() => SinkTarget::File(path.clone()),
            _ => SinkTarget::Stderr,
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self::new(default_loglevel())
    }
}

/// Sink destination, resolved once at initialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "path", rename_all = "lowercase")]
pub enum SinkTarget {
    /// Standard error
    Stderr,
    /// A file, created or truncated on open
    File(PathBuf),
}

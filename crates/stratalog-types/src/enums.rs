//! Common enumerations used throughout stratalog.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use crate::errors::{LogError, Result};

/// Severity of a log message, most severe first.
///
/// The derived ordering follows declaration rank, so `Fatal` is the least
/// value. A message at severity `s` passes a threshold `t` when `s <= t`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
#[repr(i8)]
pub enum Severity {
    /// Unrecoverable; the process terminates after the line is written
    Fatal = 0,
    /// Errors the program survives
    Severe = 1,
    /// Suspicious conditions
    Warning = 2,
    /// Informational messages
    Info = 3,
    /// Debug messages
    Debug = 4,
}

impl Severity {
    /// All severities in rank order.
    pub const ALL: [Severity; 5] = [
        Severity::Fatal,
        Severity::Severe,
        Severity::Warning,
        Severity::Info,
        Severity::Debug,
    ];

    /// Canonical name, as accepted by the level spec parser.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Fatal => "FATAL",
            Severity::Severe => "SEVERE",
            Severity::Warning => "WARNING",
            Severity::Info => "INFO",
            Severity::Debug => "DEBUG",
        }
    }

    /// Numeric rank; 0 is the most severe.
    pub fn rank(&self) -> i8 {
        *self as i8
    }

    /// Whether a message at this severity passes `threshold`.
    pub fn is_enabled_at(&self, threshold: Severity) -> bool {
        *self <= threshold
    }
}

impl FromStr for Severity {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "FATAL" => Ok(Severity::Fatal),
            "SEVERE" => Ok(Severity::Severe),
            "WARNING" => Ok(Severity::Warning),
            "INFO" => Ok(Severity::Info),
            "DEBUG" => Ok(Severity::Debug),
            _ => Err(LogError::UnknownSeverity {
                token: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

//! Per-component logger handles.

use crate::levels::LevelTable;
use std::fmt;
use std::sync::Arc;
use stratalog_types::{Severity, Sink};
use tracing::warn;

/// Exit status used after a fatal message.
pub const FATAL_EXIT_CODE: i32 = 1;

/// Logger bound to one component name.
///
/// Handles are created by a [`Registry`](crate::registry::Registry) and
/// shared as `Arc<Logger>`. Each emission resolves the component's
/// threshold against the shared level table and either writes one line
/// to the shared sink or does nothing.
pub struct Logger {
    name: String,
    levels: Arc<LevelTable>,
    sink: Arc<dyn Sink>,
}

impl Logger {
    pub(crate) fn new(name: impl Into<String>, levels: Arc<LevelTable>, sink: Arc<dyn Sink>) -> Self {
        Self {
            name: name.into(),
            levels,
            sink,
        }
    }

    /// Component name of this handle.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Threshold after hierarchical fallback.
    pub fn effective_level(&self) -> Severity {
        self.levels.resolve(&self.name)
    }

    /// Whether a message at `severity` would be written.
    pub fn is_enabled(&self, severity: Severity) -> bool {
        severity.is_enabled_at(self.effective_level())
    }

    /// Write `message` at `severity` if the threshold allows it.
    ///
    /// Returns whether a line was written. The message is only formatted
    /// once the threshold check has passed, so `format_args!` arguments
    /// cost nothing when filtered out.
    pub fn log(&self, severity: Severity, message: impl fmt::Display) -> bool {
        if !self.is_enabled(severity) {
            return false;
        }

        let line = format_line(severity, &self.name, message);
        if let Err(e) = self.sink.write_line(&line) {
            warn!("Failed to write log line for {}: {}", self.name, e);
        }
        true
    }

    /// Log at DEBUG.
    pub fn debug(&self, message: impl fmt::Display) {
        self.log(Severity::Debug, message);
    }

    /// Log at INFO.
    pub fn info(&self, message: impl fmt::Display) {
        self.log(Severity::Info, message);
    }

    /// Log at WARNING.
    pub fn warning(&self, message: impl fmt::Display) {
        self.log(Severity::Warning, message);
    }

    /// Log at SEVERE.
    pub fn severe(&self, message: impl fmt::Display) {
        self.log(Severity::Severe, message);
    }

    /// Log at FATAL, then terminate the process with a non-zero status.
    ///
    /// The line is written and the sink flushed before exiting.
    pub fn fatal(&self, message: impl fmt::Display) -> ! {
        self.log(Severity::Fatal, message);
        if let Err(e) = self.sink.flush() {
            warn!("Failed to flush log sink: {}", e);
        }
        std::process::exit(FATAL_EXIT_CODE)
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.name)
            .field("effective_level", &self.effective_level())
            .finish()
    }
}

/// Render a log line: severity, component name left-justified to 8
/// columns, message.
pub fn format_line(severity: Severity, component: &str, message: impl fmt::Display) -> String {
    format!("{} {:<8} {}", severity, component, message)
}

//! Format-string forms of the logger methods.
//!
//! Each macro takes a logger (anything that derefs to
//! [`Logger`](crate::Logger)) followed by `format!`-style arguments. The
//! arguments are passed as `format_args!`, so nothing is formatted when
//! the message is filtered out.
//!
//! ```
//! use std::sync::Arc;
//! use stratalog_core::{infof, debugf, LevelTable, MemorySink, Registry};
//!
//! let sink = MemorySink::new();
//! let registry = Registry::with_backend(LevelTable::parse("INFO").unwrap(), Arc::new(sink.clone()));
//! let logger = registry.get("http");
//!
//! infof!(logger, "listening on port {}", 8080);
//! debugf!(logger, "not written: {}", 1);
//! assert_eq!(sink.lines(), vec!["INFO http     listening on port 8080"]);
//! ```

/// Log at DEBUG with a format string.
#[macro_export]
macro_rules! debugf {
    ($logger:expr, $($arg:tt)+) => {
        $logger.debug(::std::format_args!($($arg)+))
    };
}

/// Log at INFO with a format string.
#[macro_export]
macro_rules! infof {
    ($logger:expr, $($arg:tt)+) => {
        $logger.info(::std::format_args!($($arg)+))
    };
}

/// Log at WARNING with a format string.
#[macro_export]
macro_rules! warningf {
    ($logger:expr, $($arg:tt)+) => {
        $logger.warning(::std::format_args!($($arg)+))
    };
}

/// Log at SEVERE with a format string.
#[macro_export]
macro_rules! severef {
    ($logger:expr, $($arg:tt)+) => {
        $logger.severe(::std::format_args!($($arg)+))
    };
}

/// Log at FATAL with a format string, then terminate the process.
#[macro_export]
macro_rules! fatalf {
    ($logger:expr, $($arg:tt)+) => {
        $logger.fatal(::std::format_args!($($arg)+))
    };
}

/// Log at an explicit severity with a format string.
///
/// Evaluates to whether a line was written.
#[macro_export]
macro_rules! logf {
    ($logger:expr, $severity:expr, $($arg:tt)+) => {
        $logger.log($severity, ::std::format_args!($($arg)+))
    };
}

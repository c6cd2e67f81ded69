//! # Stratalog Core
//!
//! Component-scoped leveled logging.
//!
//! Every part of a program logs through a handle named after its component,
//! a `/`-separated path such as `network/tcp/handshake`. A level spec
//! assigns minimum severities to components; a component without its own
//! entry inherits from its nearest configured ancestor.
//!
//! This crate provides:
//!
//! - **Levels**: level spec parsing and hierarchical threshold lookup
//! - **Registry**: one cached handle per component name, safe to share
//!   across threads
//! - **Sinks**: timestamped writer sinks for stderr or a file, and an
//!   in-memory sink
//! - **Configuration**: level spec and log file from a file, the
//!   environment or flags
//!
//! ## Example
//!
//! ```no_run
//! use stratalog_core::{global, infof};
//! use stratalog_types::LogConfig;
//!
//! // Initialize once at startup
//! global::init(&LogConfig::new("WARNING,network=INFO"))?;
//!
//! let logger = global::get("network/tcp");
//! infof!(logger, "connected to {}", "10.0.0.1");
//! logger.debug("not written");
//! # Ok::<(), stratalog_types::LogError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod global;
pub mod levels;
pub mod logger;
mod macros;
pub mod registry;
pub mod sink;

// Re-export commonly used items
pub use levels::LevelTable;
pub use logger::Logger;
pub use registry::Registry;
pub use sink::{open_sink, MemorySink, WriterSink};
pub use stratalog_types::{LogConfig, LogError, Result, Severity, Sink};

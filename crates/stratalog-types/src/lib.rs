//! # Stratalog Types
//!
//! Core types and traits shared across the stratalog crates.
//!
//! This crate provides the building blocks for component-scoped leveled
//! logging, including:
//!
//! - The [`Severity`] ladder, from `FATAL` down to `DEBUG`
//! - The [`Sink`] trait that emitted lines are written to
//! - Configuration types for the level spec and sink destination
//! - Error types and result aliases
//!
//! ## Example
//!
//! ```
//! use stratalog_types::Severity;
//!
//! let level: Severity = "INFO".parse().unwrap();
//! assert_eq!(level, Severity::Info);
//!
//! // Lower rank means more severe
//! assert!(Severity::Severe < Severity::Info);
//! assert!(Severity::Severe.is_enabled_at(Severity::Warning));
//! assert!(!Severity::Debug.is_enabled_at(Severity::Warning));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod enums;
pub mod errors;
pub mod traits;

// Re-export common types for convenience
pub use config::{LogConfig, SinkTarget};
pub use enums::Severity;
pub use errors::{LogError, Result};
pub use traits::Sink;

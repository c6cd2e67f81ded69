//! Error types for stratalog operations.

use thiserror::Error;

/// The main error type for stratalog operations.
///
/// Level spec problems are fatal to initialization: a spec that fails to
/// parse never produces a level table.
#[derive(Error, Debug)]
pub enum LogError {
    /// A severity token that is not one of the five canonical names
    #[error("Unknown log level '{token}'")]
    UnknownSeverity {
        /// The offending token, after trimming
        token: String,
    },

    /// A level spec clause with more than one '='
    #[error("Malformed level spec clause '{clause}': expected SEVERITY or COMPONENT=SEVERITY")]
    MalformedClause {
        /// The offending clause, as written
        clause: String,
    },

    /// The registry was used before it was initialized
    #[error("Logging is not initialized: call initialize() first")]
    NotInitialized,

    /// The registry was initialized twice
    #[error("Logging is already initialized")]
    AlreadyInitialized,

    /// Configuration-related error
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl LogError {
    /// Whether this error comes from a malformed level spec.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            LogError::UnknownSeverity { .. } | LogError::MalformedClause { .. }
        )
    }
}

/// A specialized Result type for stratalog operations.
pub type Result<T> = std::result::Result<T, LogError>;

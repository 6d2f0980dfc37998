//! Error types for configuration loading and resolution

use std::path::PathBuf;
use thiserror::Error;

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, LintrcError>;

/// Main error type for configuration loading and resolution
///
/// Every failure here is fatal to the load or resolve step that produced it.
/// Malformed input is reported with the offending key, value, or reference;
/// nothing is silently dropped or deferred to evaluation time.
#[derive(Debug, Error)]
pub enum LintrcError {
    /// Malformed or structurally invalid configuration
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// The same rule identifier was declared twice within a single layer
    #[error("Duplicate rule '{rule_id}' within a single layer")]
    DuplicateRule { rule_id: String },

    /// An `extends` entry named a rule set the provider cannot resolve
    #[error("Unresolvable rule set reference '{name}'")]
    UnknownRuleSet { name: String },

    /// An override named a rule absent from every base layer (strict mode)
    #[error("Unknown rule '{rule_id}' in overrides")]
    UnknownRule { rule_id: String },

    /// File system I/O errors
    #[error("IO error for path '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl LintrcError {
    /// Create a configuration error
    pub fn config_error(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an IO error with path context
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

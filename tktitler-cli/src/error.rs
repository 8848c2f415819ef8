//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// Grammar configuration could not be loaded
    ConfigError(String),
    /// Some aliases could not be resolved
    ParseFailed {
        /// Number of aliases that failed
        failed: usize,
        /// Number of aliases given
        total: usize,
    },
    /// A title could not be formatted
    FormatFailed(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::ParseFailed { failed, total } => {
                write!(f, "{failed} of {total} aliases could not be parsed")
            }
            CliError::FormatFailed(msg) => write!(f, "Formatting error: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;

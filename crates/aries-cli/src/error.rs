//! Error types for the ARIES CLI.

use aries_generator::GeneratorError;
use aries_triage::TriageError;
use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Bad or unreadable config file
    #[error("Configuration error: {0}")]
    Config(String),

    /// Classification, decision or store failure (already prefixed by category)
    #[error("{0}")]
    Triage(#[from] TriageError),

    /// Synthetic batch could not be built
    #[error("Batch generation failed: {0}")]
    Generator(#[from] GeneratorError),

    /// Config or history file could not be read or written
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON output failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Config file is not valid TOML
    #[error("Malformed config file: {0}")]
    Toml(#[from] toml::de::Error),

    /// Unparseable id, command or reason
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl CliError {
    /// Process exit code: 2 for bad input, 3 for a refused decision, 1 otherwise.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::InvalidInput(_) => 2,
            CliError::Triage(TriageError::Validation { .. }) => 2,
            CliError::Triage(e) if e.is_invalid_state() => 3,
            _ => 1,
        }
    }
}

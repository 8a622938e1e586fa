//! Generator error types

use thiserror::Error;

/// Errors that can occur while generating requests
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeneratorError {
    /// Invalid generator settings
    #[error("Configuration error: {0}")]
    Config(String),

    /// The vendor directory is empty
    #[error("Vendor directory is empty")]
    NoVendors,
}

/// Result type for generator operations
pub type Result<T> = std::result::Result<T, GeneratorError>;

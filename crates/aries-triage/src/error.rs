//! Triage error types

use aries_domain::{RequestId, RequestStatus};
use thiserror::Error;

/// Errors that can occur during triage operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TriageError {
    /// Malformed or out-of-range classification input
    #[error("Validation error: {field}: {message}")]
    Validation {
        /// Offending input
        field: &'static str,
        /// What is wrong with it
        message: String,
    },

    /// A decision was submitted for a request that is not awaiting one
    #[error("Invalid state: request {id} is {status}, only Human Review requests accept a decision")]
    InvalidTransition {
        /// Request the decision targeted
        id: RequestId,
        /// Status it was found in
        status: RequestStatus,
    },

    /// A rejection was submitted without saying why
    #[error("Invalid state: rejecting request {id} requires a rejection reason")]
    MissingRejectionReason {
        /// Request the rejection targeted
        id: RequestId,
    },

    /// No request with this id
    #[error("Request not found: {0}")]
    NotFound(RequestId),

    /// Store error (including version conflicts)
    #[error("Store error: {0}")]
    Store(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl TriageError {
    /// True for errors raised because a request was in the wrong state for a decision
    pub fn is_invalid_state(&self) -> bool {
        matches!(
            self,
            TriageError::InvalidTransition { .. } | TriageError::MissingRejectionReason { .. }
        )
    }

    pub(crate) fn validation(field: &'static str, message: impl Into<String>) -> Self {
        TriageError::Validation {
            field,
            message: message.into(),
        }
    }
}

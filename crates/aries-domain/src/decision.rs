//! Human decision module - verdicts a reviewer can hand down

use crate::RequestStatus;
use std::fmt;

/// A reviewer's verdict on a request parked for human review
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HumanDecision {
    /// Accept the price change
    Approve,
    /// Refuse the price change (requires a reason)
    Reject,
    /// Send the request back to the vendor
    Renegotiate,
}

impl HumanDecision {
    /// Get the verb as typed by a reviewer
    pub fn as_str(&self) -> &'static str {
        match self {
            HumanDecision::Approve => "approve",
            HumanDecision::Reject => "reject",
            HumanDecision::Renegotiate => "renegotiate",
        }
    }

    /// Parse a decision verb (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "approve" => Some(HumanDecision::Approve),
            "reject" => Some(HumanDecision::Reject),
            "renegotiate" => Some(HumanDecision::Renegotiate),
            _ => None,
        }
    }

    /// Status the request ends up in after this decision
    pub fn target_status(&self) -> RequestStatus {
        match self {
            HumanDecision::Approve => RequestStatus::Processed,
            HumanDecision::Reject => RequestStatus::AutoRejected,
            HumanDecision::Renegotiate => RequestStatus::Pending,
        }
    }

    /// Name of the audit action recorded for this decision
    pub fn action_name(&self) -> &'static str {
        match self {
            HumanDecision::Approve => "Human Approve",
            HumanDecision::Reject => "Human Reject",
            HumanDecision::Renegotiate => "Human Renegotiate",
        }
    }
}

impl fmt::Display for HumanDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for HumanDecision {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid decision: {}", s))
    }
}

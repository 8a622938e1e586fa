//! Status module - where a request sits in the approval pipeline

use std::fmt;

/// Status of a price change request
///
/// Requests are created in one of these states by the triage classifier.
/// Only `HumanReview` accepts a further transition:
/// - Approve: HumanReview → Processed
/// - Reject: HumanReview → AutoRejected
/// - Renegotiate: HumanReview → Pending
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RequestStatus {
    /// Waiting on the vendor or on more information
    Pending,

    /// Applied to the ERP
    Processed,

    /// Approved by the AI agent without human involvement
    AutoApproved,

    /// Rejected (by the AI agent, or by a reviewer)
    AutoRejected,

    /// Parked until a reviewer decides
    HumanReview,
}

impl RequestStatus {
    /// All statuses, in display order
    pub const ALL: [RequestStatus; 5] = [
        RequestStatus::Processed,
        RequestStatus::Pending,
        RequestStatus::AutoApproved,
        RequestStatus::AutoRejected,
        RequestStatus::HumanReview,
    ];

    /// Get the display label
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestStatus::Pending => "Pending",
            RequestStatus::Processed => "Processed",
            RequestStatus::AutoApproved => "Auto-Approved",
            RequestStatus::AutoRejected => "Auto-Rejected",
            RequestStatus::HumanReview => "Human Review",
        }
    }

    /// Parse a status from its label (case-insensitive, `-`/`_`/space tolerant)
    pub fn parse(s: &str) -> Option<Self> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .collect::<String>()
            .to_lowercase();

        match normalized.as_str() {
            "pending" => Some(RequestStatus::Pending),
            "processed" => Some(RequestStatus::Processed),
            "autoapproved" => Some(RequestStatus::AutoApproved),
            "autorejected" => Some(RequestStatus::AutoRejected),
            "humanreview" => Some(RequestStatus::HumanReview),
            _ => None,
        }
    }

    /// Whether the request has been carried out or closed (dashboard "processed" bucket)
    pub fn is_settled(&self) -> bool {
        matches!(
            self,
            RequestStatus::Processed | RequestStatus::AutoApproved | RequestStatus::AutoRejected
        )
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for RequestStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid request status: {}", s))
    }
}

/// Who owns the decision on a request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DecisionOwner {
    /// Decided by the AI agent
    AiAgent,

    /// Waiting on the assigned reviewer
    PendingHuman,

    /// Decided by a reviewer
    Human,
}

impl DecisionOwner {
    /// Get the display label
    pub fn as_str(&self) -> &'static str {
        match self {
            DecisionOwner::AiAgent => "AI Agent",
            DecisionOwner::PendingHuman => "Pending Human",
            DecisionOwner::Human => "Human",
        }
    }
}

impl fmt::Display for DecisionOwner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parse() {
        assert_eq!(RequestStatus::parse("Human Review"), Some(RequestStatus::HumanReview));
        assert_eq!(RequestStatus::parse("auto-approved"), Some(RequestStatus::AutoApproved));
        assert_eq!(RequestStatus::parse("AUTO_REJECTED"), Some(RequestStatus::AutoRejected));
        assert_eq!(RequestStatus::parse("done"), None);
    }

    #[test]
    fn test_settled_bucket() {
        assert!(RequestStatus::Processed.is_settled());
        assert!(RequestStatus::AutoApproved.is_settled());
        assert!(RequestStatus::AutoRejected.is_settled());
        assert!(!RequestStatus::Pending.is_settled());
        assert!(!RequestStatus::HumanReview.is_settled());
    }

    #[test]
    fn test_labels() {
        assert_eq!(RequestStatus::HumanReview.to_string(), "Human Review");
        assert_eq!(DecisionOwner::PendingHuman.to_string(), "Pending Human");
        assert_eq!(DecisionOwner::AiAgent.to_string(), "AI Agent");
    }
}

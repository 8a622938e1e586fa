//! Request module - the price change request and its upstream attributes

use crate::{ActionRecord, DecisionOwner, RequestStatus, RequiredItem, TriggerSet, Vendor};
use std::fmt;

/// Unique identifier for a price change request
///
/// Upstream sources that number their requests use the
/// `PCR-<year>-<nnnn>` form; anything else gets a UUIDv7 so identifiers
/// still sort by creation time.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(String);

impl RequestId {
    /// Generate a new UUIDv7-based RequestId
    ///
    /// # Examples
    ///
    /// ```
    /// use aries_domain::RequestId;
    ///
    /// let id = RequestId::new();
    /// assert_eq!(id.as_str().len(), 36);
    /// ```
    pub fn new() -> Self {
        Self(uuid::Uuid::now_v7().to_string())
    }

    /// Build a sequential identifier such as `PCR-2024-0007`
    ///
    /// # Examples
    ///
    /// ```
    /// use aries_domain::RequestId;
    ///
    /// let id = RequestId::sequential("PCR-2024", 7);
    /// assert_eq!(id.as_str(), "PCR-2024-0007");
    /// ```
    pub fn sequential(prefix: &str, number: u32) -> Self {
        Self(format!("{}-{:04}", prefix, number))
    }

    /// Parse a RequestId from user input
    pub fn parse(s: &str) -> Result<Self, String> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err("Request id cannot be empty".to_string());
        }
        if trimmed.chars().any(char::is_whitespace) {
            return Err(format!("Request id '{}' contains whitespace", trimmed));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Borrow the identifier text
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Attributes the triage classifier decides on
#[derive(Debug, Clone, PartialEq)]
pub struct RequestAttributes {
    /// Requesting vendor
    pub vendor: Vendor,

    /// Signed price change in percent (positive = increase)
    pub price_change_pct: f64,

    /// Signed margin effect in percent (negative = erosion)
    pub margin_impact_pct: f64,

    /// AI confidence in [0, 100]
    pub confidence_pct: f64,
}

/// A request as delivered by an upstream source, before triage
#[derive(Debug, Clone, PartialEq)]
pub struct Intake {
    /// Identifier assigned upstream, if any
    pub id: Option<RequestId>,

    /// Attributes to classify
    pub attributes: RequestAttributes,

    /// When the request was received (seconds since Unix epoch)
    pub received_at: u64,

    /// Hours left before the SLA is breached
    pub sla_hours: u32,

    /// Required items the request does not state
    pub missing_items: Vec<RequiredItem>,
}

impl Intake {
    /// Create an intake record with no upstream id and nothing missing
    pub fn new(attributes: RequestAttributes, received_at: u64, sla_hours: u32) -> Self {
        Self {
            id: None,
            attributes,
            received_at,
            sla_hours,
            missing_items: Vec::new(),
        }
    }
}

/// A price change request moving through the approval pipeline
///
/// Created once by the triage classifier; afterwards only the human
/// decision transition may change `status`, and `actions` only grows.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceChangeRequest {
    /// Unique identifier
    pub id: RequestId,

    /// Requesting vendor
    pub vendor: Vendor,

    /// Signed price change in percent
    pub price_change_pct: f64,

    /// Signed margin effect in percent
    pub margin_impact_pct: f64,

    /// AI confidence in [0, 100]
    pub confidence_pct: f64,

    /// Current status
    pub status: RequestStatus,

    /// Who owns the decision
    pub decision_owner: DecisionOwner,

    /// Triggers detected at triage
    pub triggers: TriggerSet,

    /// Explanation of the triage outcome
    pub rationale: String,

    /// Set only while the request is rejected
    pub rejection_reason: Option<String>,

    /// Hours left before the SLA is breached (fixed at creation)
    pub sla_hours: u32,

    /// Audit trail, in causal order
    pub actions: Vec<ActionRecord>,

    /// Reviewer holding the request (only while in human review)
    pub assigned_reviewer: Option<String>,

    /// Reviewer who resolved the request
    pub reviewed_by: Option<String>,

    /// Comment left by the reviewer
    pub human_comment: Option<String>,

    /// Required items the vendor did not state
    pub missing_items: Vec<RequiredItem>,

    /// When the request was received (seconds since Unix epoch)
    pub received_at: u64,

    /// Optimistic concurrency counter, maintained by the store
    pub version: u64,
}

impl PriceChangeRequest {
    /// Recover the attributes this request was classified on
    pub fn attributes(&self) -> RequestAttributes {
        RequestAttributes {
            vendor: self.vendor.clone(),
            price_change_pct: self.price_change_pct,
            margin_impact_pct: self.margin_impact_pct,
            confidence_pct: self.confidence_pct,
        }
    }

    /// Case-insensitive match on id or vendor name
    pub fn matches_text(&self, text: &str) -> bool {
        let needle = text.to_lowercase();
        self.id.as_str().to_lowercase().contains(&needle)
            || self.vendor.name.to_lowercase().contains(&needle)
    }

    /// List the lifecycle invariants this request currently breaks
    ///
    /// An empty list means the request is consistent.
    pub fn invariant_violations(&self) -> Vec<&'static str> {
        let mut violations = Vec::new();
        let in_review = self.status == RequestStatus::HumanReview;

        if in_review != (self.decision_owner == DecisionOwner::PendingHuman) {
            violations.push("human review status and pending-human owner disagree");
        }
        if in_review != self.assigned_reviewer.is_some() {
            violations.push("assigned reviewer present outside human review (or missing in it)");
        }
        if (self.status == RequestStatus::AutoRejected) != self.rejection_reason.is_some() {
            violations.push("rejection reason present iff auto-rejected");
        }

        violations
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: sequential ids always carry the prefix and a zero-padded number
        #[test]
        fn test_sequential_format(number in 0u32..10_000) {
            let id = RequestId::sequential("PCR-2024", number);
            prop_assert!(id.as_str().starts_with("PCR-2024-"));
            prop_assert_eq!(id.as_str().len(), "PCR-2024-".len() + 4);
            prop_assert_eq!(RequestId::parse(id.as_str()), Ok(id.clone()));
        }
    }
}

//! Disposition policy - which outcome a request gets within each branch
//!
//! The classifier decides *which branch* of the status policy applies
//! (escalation, confident, doubtful, ambiguous). Each branch admits more
//! than one status; the policy picks among them. The outcome enums only
//! list the statuses their branch allows, so a policy cannot produce an
//! out-of-branch status.

use crate::{RejectionReason, TriageConfig};
use aries_domain::{RequestAttributes, RequestStatus, TriggerSet, VendorCategory};

/// Outcome for high-confidence, small-increase requests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfidentOutcome {
    /// Auto-approved by the agent
    AutoApproved,
    /// Applied directly
    Processed,
}

impl ConfidentOutcome {
    /// Resulting status
    pub fn status(&self) -> RequestStatus {
        match self {
            ConfidentOutcome::AutoApproved => RequestStatus::AutoApproved,
            ConfidentOutcome::Processed => RequestStatus::Processed,
        }
    }
}

/// Outcome for low-confidence or large-increase requests
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DoubtfulOutcome {
    /// Rejected with a catalog reason
    AutoRejected(RejectionReason),
    /// Held for more information
    Pending,
}

impl DoubtfulOutcome {
    /// Resulting status
    pub fn status(&self) -> RequestStatus {
        match self {
            DoubtfulOutcome::AutoRejected(_) => RequestStatus::AutoRejected,
            DoubtfulOutcome::Pending => RequestStatus::Pending,
        }
    }
}

/// Outcome when no rule is decisive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmbiguousOutcome {
    /// Applied directly
    Processed,
    /// Held
    Pending,
    /// Auto-approved by the agent
    AutoApproved,
}

impl AmbiguousOutcome {
    /// Resulting status
    pub fn status(&self) -> RequestStatus {
        match self {
            AmbiguousOutcome::Processed => RequestStatus::Processed,
            AmbiguousOutcome::Pending => RequestStatus::Pending,
            AmbiguousOutcome::AutoApproved => RequestStatus::AutoApproved,
        }
    }
}

/// Chooses among the statuses each branch of the status policy allows
pub trait DispositionPolicy {
    /// Should a request with these triggers go to a human?
    fn escalate(
        &self,
        attributes: &RequestAttributes,
        triggers: &TriggerSet,
        config: &TriageConfig,
    ) -> bool;

    /// Outcome in the confident branch
    fn confident(&self, attributes: &RequestAttributes, config: &TriageConfig) -> ConfidentOutcome;

    /// Outcome in the doubtful branch
    fn doubtful(
        &self,
        attributes: &RequestAttributes,
        triggers: &TriggerSet,
        config: &TriageConfig,
    ) -> DoubtfulOutcome;

    /// Outcome when nothing else matched
    fn ambiguous(&self, attributes: &RequestAttributes, config: &TriageConfig) -> AmbiguousOutcome;

    /// Pick a reviewer for an escalated request
    fn assign_reviewer(&self, attributes: &RequestAttributes, reviewers: &[String]) -> Option<String>;
}

/// Deterministic production policy
///
/// - Escalates iff an escalating trigger fired (`Strategic Vendor` only
///   counts when `escalate_strategic_vendors` is set)
/// - Confident branch: auto-approve
/// - Doubtful branch: auto-reject, citing the most specific catalog reason
/// - Ambiguous branch: leave pending
/// - Reviewer: stable per vendor name
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardPolicy;

impl DispositionPolicy for StandardPolicy {
    fn escalate(
        &self,
        _attributes: &RequestAttributes,
        triggers: &TriggerSet,
        config: &TriageConfig,
    ) -> bool {
        if config.escalate_strategic_vendors {
            !triggers.is_empty()
        } else {
            triggers.has_escalating()
        }
    }

    fn confident(&self, _attributes: &RequestAttributes, _config: &TriageConfig) -> ConfidentOutcome {
        ConfidentOutcome::AutoApproved
    }

    fn doubtful(
        &self,
        attributes: &RequestAttributes,
        _triggers: &TriggerSet,
        config: &TriageConfig,
    ) -> DoubtfulOutcome {
        let reason = if attributes.price_change_pct > config.auto_reject_above_increase {
            RejectionReason::PriceIncreaseExceedsThreshold {
                threshold: config.auto_reject_above_increase,
            }
        } else if attributes.margin_impact_pct < -config.margin_erosion_threshold {
            RejectionReason::MarginErosionBeyondLimits
        } else if attributes.vendor.category == VendorCategory::Unknown {
            RejectionReason::VendorNotApproved
        } else {
            RejectionReason::InsufficientJustification
        };

        DoubtfulOutcome::AutoRejected(reason)
    }

    fn ambiguous(&self, _attributes: &RequestAttributes, _config: &TriageConfig) -> AmbiguousOutcome {
        AmbiguousOutcome::Pending
    }

    fn assign_reviewer(&self, attributes: &RequestAttributes, reviewers: &[String]) -> Option<String> {
        let pool: Vec<&String> = reviewers.iter().filter(|r| !r.trim().is_empty()).collect();
        if pool.is_empty() {
            return None;
        }
        let index = (fnv1a(attributes.vendor.name.as_bytes()) % pool.len() as u64) as usize;
        Some(pool[index].clone())
    }
}

/// FNV-1a, stable across builds and platforms
fn fnv1a(bytes: &[u8]) -> u64 {
    const OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01b3;

    bytes.iter().fold(OFFSET, |hash, &b| (hash ^ b as u64).wrapping_mul(PRIME))
}

#[cfg(test)]
mod tests {
    use super::*;
    use aries_domain::{Trigger, Vendor};

    fn attributes(category: VendorCategory, price: f64, margin: f64) -> RequestAttributes {
        RequestAttributes {
            vendor: Vendor::new("Northwind Components", category, 72.0),
            price_change_pct: price,
            margin_impact_pct: margin,
            confidence_pct: 65.0,
        }
    }

    #[test]
    fn test_strategic_alone_does_not_escalate() {
        let config = TriageConfig::default();
        let attrs = attributes(VendorCategory::Strategic, 2.0, -0.5);
        let triggers: TriggerSet = [Trigger::StrategicVendor].into_iter().collect();

        assert!(!StandardPolicy.escalate(&attrs, &triggers, &config));
        assert!(StandardPolicy.escalate(&attrs, &triggers, &TriageConfig::strict()));
    }

    #[test]
    fn test_escalating_trigger_escalates() {
        let config = TriageConfig::default();
        let attrs = attributes(VendorCategory::NonStrategic, 7.0, -5.5);
        let triggers: TriggerSet = [Trigger::HighMarginImpact].into_iter().collect();

        assert!(StandardPolicy.escalate(&attrs, &triggers, &config));
        assert!(!StandardPolicy.escalate(&attrs, &TriggerSet::new(), &config));
    }

    #[test]
    fn test_doubtful_reason_selection() {
        let config = TriageConfig::default();
        let none = TriggerSet::new();

        let outcome = StandardPolicy.doubtful(&attributes(VendorCategory::NonStrategic, 16.0, -6.0), &none, &config);
        assert_eq!(
            outcome,
            DoubtfulOutcome::AutoRejected(RejectionReason::PriceIncreaseExceedsThreshold { threshold: 15.0 })
        );

        let outcome = StandardPolicy.doubtful(&attributes(VendorCategory::NonStrategic, 4.0, -5.2), &none, &config);
        assert_eq!(outcome, DoubtfulOutcome::AutoRejected(RejectionReason::MarginErosionBeyondLimits));

        let outcome = StandardPolicy.doubtful(&attributes(VendorCategory::Unknown, 4.0, -1.2), &none, &config);
        assert_eq!(outcome, DoubtfulOutcome::AutoRejected(RejectionReason::VendorNotApproved));

        let outcome = StandardPolicy.doubtful(&attributes(VendorCategory::NonStrategic, 4.0, -1.2), &none, &config);
        assert_eq!(outcome, DoubtfulOutcome::AutoRejected(RejectionReason::InsufficientJustification));
        assert_eq!(outcome.status(), RequestStatus::AutoRejected);
    }

    #[test]
    fn test_reviewer_is_stable_per_vendor() {
        let reviewers = TriageConfig::default().reviewers;
        let attrs = attributes(VendorCategory::Unknown, 12.0, -6.0);

        let first = StandardPolicy.assign_reviewer(&attrs, &reviewers).unwrap();
        let second = StandardPolicy.assign_reviewer(&attrs, &reviewers).unwrap();
        assert_eq!(first, second);
        assert!(reviewers.contains(&first));
    }

    #[test]
    fn test_no_reviewers() {
        let attrs = attributes(VendorCategory::Unknown, 12.0, -6.0);
        assert_eq!(StandardPolicy.assign_reviewer(&attrs, &[]), None);
        assert_eq!(StandardPolicy.assign_reviewer(&attrs, &["  ".to_string()]), None);
    }

    #[test]
    fn test_fnv1a_known_value() {
        assert_eq!(fnv1a(b""), 0xcbf2_9ce4_8422_2325);
        assert_eq!(fnv1a(b"a"), 0xaf63_dc4c_8601_ec8c);
    }
}

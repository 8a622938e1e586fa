//! Request classification logic

use crate::actions::seed_actions;
use crate::policy::{DispositionPolicy, DoubtfulOutcome, StandardPolicy};
use crate::rationale::build_rationale;
use crate::{TriageConfig, TriageError};
use aries_domain::{
    ActionRecord, DecisionOwner, Intake, PriceChangeRequest, RequestAttributes, RequestStatus,
    Trigger, TriggerSet, VendorCategory,
};
use tracing::debug;

/// Result of classifying a request
#[derive(Debug, Clone, PartialEq)]
pub struct ClassificationResult {
    /// Initial status
    pub status: RequestStatus,

    /// Who owns the decision
    pub decision_owner: DecisionOwner,

    /// Triggers that fired, in detection order
    pub triggers: TriggerSet,

    /// Explanation of the classification
    pub rationale: String,

    /// Set only for auto-rejected requests
    pub rejection_reason: Option<String>,

    /// Set only for escalated requests
    pub assigned_reviewer: Option<String>,

    /// Seeded audit actions
    pub actions: Vec<ActionRecord>,
}

impl ClassificationResult {
    /// Materialize the request this classification describes
    ///
    /// Uses the upstream id when the intake carries one, a fresh UUIDv7 otherwise.
    pub fn into_request(self, intake: Intake) -> PriceChangeRequest {
        let Intake {
            id,
            attributes,
            received_at,
            sla_hours,
            missing_items,
        } = intake;

        PriceChangeRequest {
            id: id.unwrap_or_default(),
            vendor: attributes.vendor,
            price_change_pct: attributes.price_change_pct,
            margin_impact_pct: attributes.margin_impact_pct,
            confidence_pct: attributes.confidence_pct,
            status: self.status,
            decision_owner: self.decision_owner,
            triggers: self.triggers,
            rationale: self.rationale,
            rejection_reason: self.rejection_reason,
            sla_hours,
            actions: self.actions,
            assigned_reviewer: self.assigned_reviewer,
            reviewed_by: None,
            human_comment: None,
            missing_items,
            received_at,
            version: 0,
        }
    }
}

/// The triage classifier maps request attributes to an initial disposition
///
/// # Examples
///
/// ```
/// use aries_domain::{RequestAttributes, RequestStatus, Vendor, VendorCategory};
/// use aries_triage::{Classifier, TriageConfig};
///
/// let classifier = Classifier::new(TriageConfig::default());
/// let attributes = RequestAttributes {
///     vendor: Vendor::new("Apex Industrial Supply", VendorCategory::Strategic, 95.0),
///     price_change_pct: 2.0,
///     margin_impact_pct: 0.6,
///     confidence_pct: 92.0,
/// };
///
/// let result = classifier.classify(&attributes, 0).unwrap();
/// assert_eq!(result.status, RequestStatus::AutoApproved);
/// assert_eq!(result.actions.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Classifier<P = StandardPolicy> {
    config: TriageConfig,
    policy: P,
}

impl Classifier<StandardPolicy> {
    /// Create a classifier with the deterministic standard policy
    pub fn new(config: TriageConfig) -> Self {
        Self::with_policy(config, StandardPolicy)
    }

    /// Create a classifier with default configuration
    pub fn default_config() -> Self {
        Self::new(TriageConfig::default())
    }
}

impl<P: DispositionPolicy> Classifier<P> {
    /// Create a classifier with a custom disposition policy
    pub fn with_policy(config: TriageConfig, policy: P) -> Self {
        Self { config, policy }
    }

    /// Get the active configuration
    pub fn config(&self) -> &TriageConfig {
        &self.config
    }

    /// Get the disposition policy
    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// Classify a request
    ///
    /// `now` is only used to timestamp the seeded actions; it never
    /// influences the outcome.
    pub fn classify(
        &self,
        attributes: &RequestAttributes,
        now: u64,
    ) -> Result<ClassificationResult, TriageError> {
        // 1. Reject malformed input before doing anything
        validate_attributes(attributes)?;

        // 2. Detect every trigger that applies
        let triggers = self.detect_triggers(attributes);

        // 3. Status policy, first matching branch wins
        let config = &self.config;
        let mut rejection_reason = None;
        let mut assigned_reviewer = None;
        let mut decision_owner = DecisionOwner::AiAgent;

        let status = if !triggers.is_empty() && self.policy.escalate(attributes, &triggers, config) {
            let reviewer = self
                .policy
                .assign_reviewer(attributes, &config.reviewers)
                .ok_or_else(|| {
                    TriageError::Config("no reviewer available for escalation".to_string())
                })?;
            assigned_reviewer = Some(reviewer);
            decision_owner = DecisionOwner::PendingHuman;
            RequestStatus::HumanReview
        } else if attributes.confidence_pct > config.auto_approve_min_confidence
            && attributes.price_change_pct < config.auto_approve_max_increase
        {
            self.policy.confident(attributes, config).status()
        } else if attributes.confidence_pct < config.auto_reject_below_confidence
            || attributes.price_change_pct > config.auto_reject_above_increase
        {
            let outcome = self.policy.doubtful(attributes, &triggers, config);
            if let DoubtfulOutcome::AutoRejected(reason) = outcome {
                rejection_reason = Some(reason.to_string());
            }
            outcome.status()
        } else {
            self.policy.ambiguous(attributes, config).status()
        };

        // 4. Explanation and audit trail
        let rationale = build_rationale(attributes, config);
        let actions = seed_actions(status, now);

        debug!(
            vendor = %attributes.vendor.name,
            status = %status,
            triggers = %triggers,
            "classified price change request"
        );

        Ok(ClassificationResult {
            status,
            decision_owner,
            triggers,
            rationale,
            rejection_reason,
            assigned_reviewer,
            actions,
        })
    }

    /// Classify an intake record and build the request
    pub fn classify_intake(
        &self,
        intake: Intake,
        now: u64,
    ) -> Result<PriceChangeRequest, TriageError> {
        let result = self.classify(&intake.attributes, now)?;
        Ok(result.into_request(intake))
    }

    /// Detect triggers, in detection order
    pub fn detect_triggers(&self, attributes: &RequestAttributes) -> TriggerSet {
        let config = &self.config;
        let vendor = &attributes.vendor;
        let significant_increase = attributes.price_change_pct > config.significant_increase_pct;
        let mut triggers = TriggerSet::new();

        if vendor.category == VendorCategory::Unknown
            || vendor.trust_score < config.untrusted_vendor_below
        {
            triggers.insert(Trigger::UnknownVendor);
        }

        if vendor.category == VendorCategory::Strategic {
            triggers.insert(Trigger::StrategicVendor);
        }

        if attributes.margin_impact_pct.abs() > config.margin_erosion_threshold || significant_increase {
            triggers.insert(Trigger::HighMarginImpact);
        }

        if significant_increase {
            triggers.insert(Trigger::SignificantPriceIncrease);
        }

        triggers
    }
}

/// Validate classification input (finite numbers, bounded scores, named vendor)
fn validate_attributes(attributes: &RequestAttributes) -> Result<(), TriageError> {
    if attributes.vendor.name.trim().is_empty() {
        return Err(TriageError::validation("vendor", "name cannot be empty"));
    }

    let numbers = [
        ("vendor_trust_score", attributes.vendor.trust_score),
        ("price_change_pct", attributes.price_change_pct),
        ("margin_impact_pct", attributes.margin_impact_pct),
        ("confidence_pct", attributes.confidence_pct),
    ];
    for (field, value) in numbers {
        if !value.is_finite() {
            return Err(TriageError::validation(field, format!("{} is not a finite number", value)));
        }
    }

    let scores = [
        ("vendor_trust_score", attributes.vendor.trust_score),
        ("confidence_pct", attributes.confidence_pct),
    ];
    for (field, value) in scores {
        if !(0.0..=100.0).contains(&value) {
            return Err(TriageError::validation(
                field,
                format!("{} is outside [0, 100]", value),
            ));
        }
    }

    Ok(())
}

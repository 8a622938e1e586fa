//! Triage desk - classifier, decision transition and request store wired together

use crate::policy::{DispositionPolicy, StandardPolicy};
use crate::transition::resolve;
use crate::{
    decision_log, review_queue, Classifier, DecisionFilter, DecisionLogEntry, ReviewReason,
    TriageError, TriageMetrics,
};
use aries_domain::traits::{RequestQuery, RequestStore};
use aries_domain::{HumanDecision, Intake, PriceChangeRequest, RequestId};
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::{info, warn};

/// Current timestamp in seconds since Unix epoch
pub fn current_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Front door for price change requests
///
/// Classifies incoming requests into the store and applies reviewer
/// decisions with an optimistic version check, so two reviewers acting on
/// the same request cannot both succeed.
///
/// # Examples
///
/// ```no_run
/// use aries_domain::{HumanDecision, Intake, RequestAttributes, Vendor, VendorCategory};
/// use aries_store::InMemoryStore;
/// use aries_triage::{Classifier, TriageDesk};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut desk = TriageDesk::new(Classifier::default_config(), InMemoryStore::new());
/// let attributes = RequestAttributes {
///     vendor: Vendor::new("Unverified Trading Co", VendorCategory::Unknown, 30.0),
///     price_change_pct: 12.5,
///     margin_impact_pct: -6.2,
///     confidence_pct: 65.0,
/// };
///
/// let request = desk.intake(Intake::new(attributes, 0, 8))?;
/// let resolved = desk.decide(&request.id, HumanDecision::Approve, None, None)?;
/// println!("{} is now {}", resolved.id, resolved.status);
/// # Ok(())
/// # }
/// ```
pub struct TriageDesk<S, P = StandardPolicy> {
    classifier: Classifier<P>,
    store: S,
}

impl<S, P> TriageDesk<S, P>
where
    S: RequestStore,
    S::Error: std::fmt::Display,
    P: DispositionPolicy,
{
    /// Create a desk over a store
    pub fn new(classifier: Classifier<P>, store: S) -> Self {
        Self { classifier, store }
    }

    /// Get the classifier
    pub fn classifier(&self) -> &Classifier<P> {
        &self.classifier
    }

    /// Get the underlying store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Classify and store a new request
    pub fn intake(&mut self, intake: Intake) -> Result<PriceChangeRequest, TriageError> {
        self.intake_at(intake, current_timestamp())
    }

    /// Classify and store a new request, stamping actions with `now`
    pub fn intake_at(&mut self, intake: Intake, now: u64) -> Result<PriceChangeRequest, TriageError> {
        let request = self.classifier.classify_intake(intake, now)?;
        self.store
            .insert_request(request.clone())
            .map_err(|e| TriageError::Store(format!("Failed to insert request: {}", e)))?;

        info!(id = %request.id, status = %request.status, "request triaged");
        Ok(request)
    }

    /// Apply a reviewer decision
    pub fn decide(
        &mut self,
        id: &RequestId,
        decision: HumanDecision,
        comment: Option<&str>,
        rejection_reason: Option<&str>,
    ) -> Result<PriceChangeRequest, TriageError> {
        self.decide_at(id, decision, comment, rejection_reason, current_timestamp())
    }

    /// Apply a reviewer decision, stamping the audit action with `now`
    pub fn decide_at(
        &mut self,
        id: &RequestId,
        decision: HumanDecision,
        comment: Option<&str>,
        rejection_reason: Option<&str>,
        now: u64,
    ) -> Result<PriceChangeRequest, TriageError> {
        let mut request = self.get(id)?;
        let expected_version = request.version;

        if let Err(e) = resolve(&mut request, decision, comment, rejection_reason, now) {
            warn!(id = %id, decision = %decision, error = %e, "decision refused");
            return Err(e);
        }

        request.version = self
            .store
            .update_request(request.clone(), expected_version)
            .map_err(|e| TriageError::Store(format!("Failed to update request {}: {}", id, e)))?;

        info!(
            id = %id,
            decision = %decision,
            status = %request.status,
            reviewer = request.reviewed_by.as_deref().unwrap_or("-"),
            "human decision recorded"
        );
        Ok(request)
    }

    /// Get a request by id
    pub fn get(&self, id: &RequestId) -> Result<PriceChangeRequest, TriageError> {
        self.store
            .get_request(id)
            .map_err(|e| TriageError::Store(format!("Failed to get request {}: {}", id, e)))?
            .ok_or_else(|| TriageError::NotFound(id.clone()))
    }

    /// Search requests
    pub fn search(&self, query: &RequestQuery) -> Result<Vec<PriceChangeRequest>, TriageError> {
        self.store
            .query_requests(query)
            .map_err(|e| TriageError::Store(format!("Failed to query requests: {}", e)))
    }

    /// Requests awaiting a reviewer, most urgent first
    pub fn review_queue(
        &self,
        reason: Option<ReviewReason>,
    ) -> Result<Vec<PriceChangeRequest>, TriageError> {
        Ok(review_queue(self.search(&RequestQuery::all())?, reason))
    }

    /// Decision and completed-action history of settled requests, newest first
    pub fn decision_log(&self, filter: DecisionFilter) -> Result<Vec<DecisionLogEntry>, TriageError> {
        let requests = self.search(&RequestQuery::all())?;
        Ok(decision_log(&requests, filter))
    }

    /// KPIs over everything in the store
    pub fn metrics(&self) -> Result<TriageMetrics, TriageError> {
        let requests = self.search(&RequestQuery::all())?;
        Ok(TriageMetrics::from_requests(&requests))
    }
}

//! Integration tests for the triage desk over the in-memory store
//!
//! These tests verify the full intake → review → decision cycle.

use aries_domain::traits::RequestQuery;
use aries_domain::{
    DecisionOwner, Executor, HumanDecision, Intake, RequestAttributes, RequestId, RequestStatus,
    RequiredItem, Vendor, VendorCategory,
};
use aries_store::InMemoryStore;
use aries_triage::{
    Classifier, DecisionFilter, LogEntryKind, ReviewReason, TriageConfig, TriageDesk, TriageError,
};

#[allow(clippy::too_many_arguments)]
fn intake(
    number: u32,
    vendor: &str,
    category: VendorCategory,
    trust: f64,
    price: f64,
    margin: f64,
    confidence: f64,
    sla_hours: u32,
) -> Intake {
    let attributes = RequestAttributes {
        vendor: Vendor::new(vendor, category, trust),
        price_change_pct: price,
        margin_impact_pct: margin,
        confidence_pct: confidence,
    };
    let mut intake = Intake::new(attributes, 1_700_000_000 + number as u64, sla_hours);
    intake.id = Some(RequestId::sequential("PCR-2024", number));
    intake
}

fn seeded_desk() -> TriageDesk<InMemoryStore> {
    let mut desk = TriageDesk::new(Classifier::default_config(), InMemoryStore::new());

    // Escalated: unknown sender
    desk.intake_at(
        intake(1, "Unverified Trading Co", VendorCategory::Unknown, 30.0, 12.5, -6.2, 65.0, 30),
        100,
    )
    .unwrap();
    // Escalated: margin breach
    desk.intake_at(
        intake(2, "Globex Components", VendorCategory::NonStrategic, 80.0, 11.0, -7.0, 88.0, 4),
        100,
    )
    .unwrap();
    // Auto-approved strategic vendor
    desk.intake_at(
        intake(3, "Apex Industrial Supply", VendorCategory::Strategic, 95.0, 2.0, 0.6, 92.0, 12),
        100,
    )
    .unwrap();
    // Auto-rejected on low confidence
    desk.intake_at(
        intake(4, "Initech Hydraulics", VendorCategory::NonStrategic, 80.0, 4.0, -1.5, 64.0, 20),
        100,
    )
    .unwrap();
    // Held pending
    desk.intake_at(
        intake(5, "Hooli Fasteners", VendorCategory::NonStrategic, 80.0, 6.0, -2.4, 78.0, 8),
        100,
    )
    .unwrap();

    desk
}

#[test]
fn test_intake_stores_classified_request() {
    let desk = seeded_desk();

    let request = desk.get(&RequestId::sequential("PCR-2024", 1)).unwrap();
    assert_eq!(request.status, RequestStatus::HumanReview);
    assert_eq!(request.decision_owner, DecisionOwner::PendingHuman);
    assert!(request.assigned_reviewer.is_some());
    assert_eq!(request.version, 0);
    assert!(request.invariant_violations().is_empty());

    assert_eq!(desk.store().len(), 5);
}

#[test]
fn test_approve_moves_reviewer_and_appends_action() {
    let mut desk = seeded_desk();
    let id = RequestId::sequential("PCR-2024", 1);
    let before = desk.get(&id).unwrap();

    let resolved = desk
        .decide_at(&id, HumanDecision::Approve, Some("Vendor verified by phone"), None, 500)
        .unwrap();

    assert_eq!(resolved.status, RequestStatus::Processed);
    assert_eq!(resolved.decision_owner, DecisionOwner::Human);
    assert_eq!(resolved.reviewed_by, before.assigned_reviewer);
    assert!(resolved.assigned_reviewer.is_none());
    assert_eq!(resolved.human_comment.as_deref(), Some("Vendor verified by phone"));
    assert_eq!(resolved.actions.len(), before.actions.len() + 1);

    let last = resolved.actions.last().unwrap();
    assert_eq!(last.name, "Human Approve");
    assert_eq!(last.executor, Executor::Human);
    assert_eq!(last.timestamp, 500);

    let stored = desk.get(&id).unwrap();
    assert_eq!(stored, resolved);
    assert_eq!(stored.version, 1);
    assert!(stored.invariant_violations().is_empty());
}

#[test]
fn test_reject_requires_reason() {
    let mut desk = seeded_desk();
    let id = RequestId::sequential("PCR-2024", 2);

    let err = desk
        .decide_at(&id, HumanDecision::Reject, None, Some("   "), 500)
        .unwrap_err();
    assert!(matches!(err, TriageError::MissingRejectionReason { .. }));
    assert!(err.is_invalid_state());

    // Nothing was written
    let untouched = desk.get(&id).unwrap();
    assert_eq!(untouched.status, RequestStatus::HumanReview);
    assert_eq!(untouched.version, 0);

    let rejected = desk
        .decide_at(
            &id,
            HumanDecision::Reject,
            None,
            Some("Margin erosion beyond acceptable limits"),
            600,
        )
        .unwrap();
    assert_eq!(rejected.status, RequestStatus::AutoRejected);
    assert_eq!(
        rejected.rejection_reason.as_deref(),
        Some("Margin erosion beyond acceptable limits")
    );
}

#[test]
fn test_second_decision_is_refused() {
    let mut desk = seeded_desk();
    let id = RequestId::sequential("PCR-2024", 1);

    desk.decide_at(&id, HumanDecision::Renegotiate, None, None, 500)
        .unwrap();
    let parked = desk.get(&id).unwrap();
    assert_eq!(parked.status, RequestStatus::Pending);

    let err = desk
        .decide_at(&id, HumanDecision::Approve, None, None, 700)
        .unwrap_err();
    assert_eq!(
        err,
        TriageError::InvalidTransition {
            id: id.clone(),
            status: RequestStatus::Pending,
        }
    );
    assert_eq!(desk.get(&id).unwrap(), parked);
}

#[test]
fn test_decision_on_non_review_request_is_refused() {
    let mut desk = seeded_desk();
    let id = RequestId::sequential("PCR-2024", 3);

    let err = desk
        .decide_at(&id, HumanDecision::Approve, None, None, 500)
        .unwrap_err();
    assert!(matches!(
        err,
        TriageError::InvalidTransition {
            status: RequestStatus::AutoApproved,
            ..
        }
    ));
}

#[test]
fn test_decision_on_unknown_request() {
    let mut desk = seeded_desk();
    let id = RequestId::sequential("PCR-2024", 99);

    let err = desk
        .decide_at(&id, HumanDecision::Approve, None, None, 500)
        .unwrap_err();
    assert_eq!(err, TriageError::NotFound(id));
}

#[test]
fn test_duplicate_intake_surfaces_store_error() {
    let mut desk = seeded_desk();
    let err = desk
        .intake_at(
            intake(1, "Unverified Trading Co", VendorCategory::Unknown, 30.0, 12.5, -6.2, 65.0, 30),
            100,
        )
        .unwrap_err();
    assert!(matches!(err, TriageError::Store(_)));
}

#[test]
fn test_review_queue_orders_by_sla() {
    let mut desk = seeded_desk();

    let queue = desk.review_queue(None).unwrap();
    let ids: Vec<&str> = queue.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["PCR-2024-0002", "PCR-2024-0001"]);

    let margin = desk.review_queue(Some(ReviewReason::MarginBreach)).unwrap();
    assert_eq!(margin.len(), 1);
    assert_eq!(margin[0].id.as_str(), "PCR-2024-0002");

    desk.decide_at(
        &RequestId::sequential("PCR-2024", 2),
        HumanDecision::Approve,
        None,
        None,
        500,
    )
    .unwrap();
    let queue = desk.review_queue(None).unwrap();
    assert_eq!(queue.len(), 1);
    assert_eq!(queue[0].id.as_str(), "PCR-2024-0001");
}

#[test]
fn test_search_by_text_and_status() {
    let desk = seeded_desk();

    let globex = desk
        .search(&RequestQuery {
            text: Some("GLOBEX".to_string()),
            ..RequestQuery::default()
        })
        .unwrap();
    assert_eq!(globex.len(), 1);

    let pending = desk
        .search(&RequestQuery::with_status(RequestStatus::Pending))
        .unwrap();
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].vendor.name, "Hooli Fasteners");
}

#[test]
fn test_metrics_follow_decisions() {
    let mut desk = seeded_desk();

    let metrics = desk.metrics().unwrap();
    assert_eq!(metrics.total, 5);
    assert_eq!(metrics.human_review, 2);
    assert_eq!(metrics.auto_approved, 1);
    assert_eq!(metrics.rejected, 1);
    assert_eq!(metrics.pending, 1);
    assert_eq!(metrics.processed, 2);
    assert_eq!(metrics.ai_decisions, 2);
    assert_eq!(metrics.automation_rate(), 40.0);

    desk.decide_at(
        &RequestId::sequential("PCR-2024", 1),
        HumanDecision::Reject,
        None,
        Some("Vendor not approved for this product category"),
        500,
    )
    .unwrap();

    let metrics = desk.metrics().unwrap();
    assert_eq!(metrics.human_review, 1);
    assert_eq!(metrics.rejected, 2);
    assert_eq!(metrics.processed, 3);
    assert_eq!(metrics.ai_decisions, 2);
    assert_eq!(metrics.human_decisions, 1);
    assert_eq!(metrics.automation_rate(), 40.0);
}

#[test]
fn test_decision_log_filters() {
    let mut desk = seeded_desk();
    let reviewed = RequestId::sequential("PCR-2024", 1);
    desk.decide_at(
        &reviewed,
        HumanDecision::Reject,
        None,
        Some("Vendor not approved for this product category"),
        500,
    )
    .unwrap();

    // Settled: 0003 approved, 0004 rejected, 0001 rejected by a reviewer
    let all = desk.decision_log(DecisionFilter::All).unwrap();
    assert_eq!(all.len(), 9);
    assert!(all.iter().all(|e| e.status.is_settled()));
    assert!(all.windows(2).all(|w| w[0].timestamp >= w[1].timestamp));

    let ai = desk.decision_log(DecisionFilter::Ai).unwrap();
    assert_eq!(ai.len(), 7);
    assert!(ai.iter().all(|e| e.by_agent()));

    let human = desk.decision_log(DecisionFilter::Human).unwrap();
    assert_eq!(human.len(), 2);
    assert!(human.iter().all(|e| e.request_id == reviewed));
    assert!(matches!(human[0].kind, LogEntryKind::Decision { .. }));
    assert_eq!(human[1].label(), "Human Reject");

    let rejected = desk.decision_log(DecisionFilter::Rejected).unwrap();
    let ids: Vec<&str> = rejected.iter().map(|e| e.request_id.as_str()).collect();
    assert_eq!(ids, vec!["PCR-2024-0004", "PCR-2024-0001"]);
}

#[test]
fn test_missing_information_reason() {
    let config = TriageConfig {
        escalate_strategic_vendors: true,
        ..TriageConfig::default()
    };
    let mut desk = TriageDesk::new(Classifier::new(config), InMemoryStore::new());

    let mut strategic = intake(7, "Apex Industrial Supply", VendorCategory::Strategic, 95.0, 2.0, 0.6, 92.0, 6);
    strategic.missing_items = vec![RequiredItem::PaymentTerms];
    desk.intake_at(strategic, 100).unwrap();

    let queue = desk
        .review_queue(Some(ReviewReason::MissingInformation))
        .unwrap();
    assert_eq!(queue.len(), 1);
    assert_eq!(queue[0].missing_items, vec![RequiredItem::PaymentTerms]);
}

//! Human-in-the-loop decision transition
//!
//! | From         | Decision    | To            | Audit action        |
//! |--------------|-------------|---------------|---------------------|
//! | Human Review | approve     | Processed     | `Human Approve`     |
//! | Human Review | reject      | Auto-Rejected | `Human Reject`      |
//! | Human Review | renegotiate | Pending       | `Human Renegotiate` |
//!
//! Any other starting status is an invalid state, so a request can only be
//! resolved once.

use crate::TriageError;
use aries_domain::{
    ActionRecord, ActionStatus, DecisionOwner, Executor, HumanDecision, PriceChangeRequest,
    RequestStatus,
};

/// Apply a reviewer's decision to a request parked for human review
///
/// On success the request's status follows the table above, the decision
/// owner becomes `Human`, the reviewer moves from `assigned_reviewer` to
/// `reviewed_by`, a non-blank comment is stored and exactly one action is
/// appended. On error the request is left untouched.
pub fn resolve(
    request: &mut PriceChangeRequest,
    decision: HumanDecision,
    comment: Option<&str>,
    rejection_reason: Option<&str>,
    now: u64,
) -> Result<(), TriageError> {
    if request.status != RequestStatus::HumanReview {
        return Err(TriageError::InvalidTransition {
            id: request.id.clone(),
            status: request.status,
        });
    }

    let rejection_reason = match decision {
        HumanDecision::Reject => {
            let reason = rejection_reason
                .map(str::trim)
                .filter(|r| !r.is_empty())
                .ok_or_else(|| TriageError::MissingRejectionReason {
                    id: request.id.clone(),
                })?;
            Some(reason.to_string())
        }
        HumanDecision::Approve | HumanDecision::Renegotiate => None,
    };

    request.status = decision.target_status();
    request.decision_owner = DecisionOwner::Human;
    request.rejection_reason = rejection_reason;
    request.reviewed_by = request.assigned_reviewer.take();
    if let Some(comment) = comment.map(str::trim).filter(|c| !c.is_empty()) {
        request.human_comment = Some(comment.to_string());
    }
    request.actions.push(ActionRecord::new(
        decision.action_name(),
        Executor::Human,
        ActionStatus::Completed,
        now,
    ));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Classifier;
    use aries_domain::{Intake, RequestAttributes, Vendor, VendorCategory};

    fn parked_request() -> PriceChangeRequest {
        let attributes = RequestAttributes {
            vendor: Vendor::new("Unverified Trading Co", VendorCategory::Unknown, 30.0),
            price_change_pct: 12.5,
            margin_impact_pct: -6.2,
            confidence_pct: 65.0,
        };
        let request = Classifier::default_config()
            .classify_intake(Intake::new(attributes, 1_000, 8), 1_000)
            .unwrap();
        assert_eq!(request.status, RequestStatus::HumanReview);
        request
    }

    #[test]
    fn test_approve() {
        let mut request = parked_request();
        let reviewer = request.assigned_reviewer.clone();
        let before = request.actions.len();

        resolve(&mut request, HumanDecision::Approve, Some("Matches the Q3 index"), None, 2_000).unwrap();

        assert_eq!(request.status, RequestStatus::Processed);
        assert_eq!(request.decision_owner, DecisionOwner::Human);
        assert_eq!(request.actions.len(), before + 1);
        let last = request.actions.last().unwrap();
        assert_eq!(last.name, "Human Approve");
        assert_eq!(last.executor, Executor::Human);
        assert_eq!(last.status, ActionStatus::Completed);
        assert_eq!(last.timestamp, 2_000);
        assert_eq!(request.human_comment.as_deref(), Some("Matches the Q3 index"));
        assert_eq!(request.assigned_reviewer, None);
        assert_eq!(request.reviewed_by, reviewer);
        assert!(request.invariant_violations().is_empty());
    }

    #[test]
    fn test_reject_requires_reason() {
        let mut request = parked_request();
        let snapshot = request.clone();

        let err = resolve(&mut request, HumanDecision::Reject, None, None, 2_000).unwrap_err();
        assert!(matches!(err, TriageError::MissingRejectionReason { .. }));
        assert!(err.is_invalid_state());

        let err = resolve(&mut request, HumanDecision::Reject, None, Some("   "), 2_000).unwrap_err();
        assert!(matches!(err, TriageError::MissingRejectionReason { .. }));

        assert_eq!(request, snapshot, "failed rejection must not mutate the request");
    }

    #[test]
    fn test_reject_with_reason() {
        let mut request = parked_request();
        resolve(
            &mut request,
            HumanDecision::Reject,
            None,
            Some("Alternative supplier available at better price"),
            2_000,
        )
        .unwrap();

        assert_eq!(request.status, RequestStatus::AutoRejected);
        assert_eq!(
            request.rejection_reason.as_deref(),
            Some("Alternative supplier available at better price")
        );
        assert_eq!(request.actions.last().unwrap().name, "Human Reject");
        assert!(request.invariant_violations().is_empty());
    }

    #[test]
    fn test_renegotiate() {
        let mut request = parked_request();
        resolve(&mut request, HumanDecision::Renegotiate, Some(""), Some("ignored"), 2_000).unwrap();

        assert_eq!(request.status, RequestStatus::Pending);
        assert_eq!(request.rejection_reason, None);
        assert_eq!(request.human_comment, None);
        assert_eq!(request.actions.last().unwrap().name, "Human Renegotiate");
    }

    #[test]
    fn test_second_resolve_fails() {
        let mut request = parked_request();
        resolve(&mut request, HumanDecision::Approve, None, None, 2_000).unwrap();
        let actions = request.actions.len();

        let err = resolve(&mut request, HumanDecision::Renegotiate, None, None, 3_000).unwrap_err();
        assert_eq!(
            err,
            TriageError::InvalidTransition {
                id: request.id.clone(),
                status: RequestStatus::Processed,
            }
        );
        assert_eq!(request.actions.len(), actions);
    }

    #[test]
    fn test_resolve_non_review_request_fails() {
        let attributes = RequestAttributes {
            vendor: Vendor::new("Apex Industrial Supply", VendorCategory::Strategic, 95.0),
            price_change_pct: 2.0,
            margin_impact_pct: 0.6,
            confidence_pct: 92.0,
        };
        let mut request = Classifier::default_config()
            .classify_intake(Intake::new(attributes, 1_000, 8), 1_000)
            .unwrap();
        request.status = RequestStatus::Processed;

        let err = resolve(&mut request, HumanDecision::Approve, None, None, 2_000).unwrap_err();
        assert!(err.is_invalid_state());
        assert!(err.to_string().contains("only Human Review requests accept a decision"));
    }
}

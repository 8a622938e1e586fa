//! Actions seeded onto a request when it is classified

use aries_domain::{ActionRecord, ActionStatus, Executor, RequestStatus};

/// Audit actions the agent records for a freshly classified request
pub fn seed_actions(status: RequestStatus, timestamp: u64) -> Vec<ActionRecord> {
    match status {
        RequestStatus::AutoApproved | RequestStatus::Processed => vec![
            ActionRecord::agent_completed("ERP Price Update Triggered", timestamp),
            ActionRecord::agent_completed("Supplier Notification Sent", timestamp),
        ],
        RequestStatus::AutoRejected => vec![
            ActionRecord::agent_completed("Counter-Offer Generated", timestamp),
            ActionRecord::agent_completed("Supplier Notification Sent", timestamp),
        ],
        RequestStatus::HumanReview => vec![
            ActionRecord::agent_completed("Escalation Triggered", timestamp),
            ActionRecord::new(
                "Request Parked for Review",
                Executor::AiAgent,
                ActionStatus::Pending,
                timestamp,
            ),
        ],
        RequestStatus::Pending => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(actions: &[ActionRecord]) -> Vec<&str> {
        actions.iter().map(|a| a.name.as_str()).collect()
    }

    #[test]
    fn test_approved_and_processed_seed_erp_update() {
        for status in [RequestStatus::AutoApproved, RequestStatus::Processed] {
            let actions = seed_actions(status, 42);
            assert_eq!(names(&actions), vec!["ERP Price Update Triggered", "Supplier Notification Sent"]);
            assert!(actions.iter().all(|a| a.status == ActionStatus::Completed && a.timestamp == 42));
        }
    }

    #[test]
    fn test_rejected_seeds_counter_offer() {
        let actions = seed_actions(RequestStatus::AutoRejected, 42);
        assert_eq!(names(&actions), vec!["Counter-Offer Generated", "Supplier Notification Sent"]);
    }

    #[test]
    fn test_human_review_parks_request() {
        let actions = seed_actions(RequestStatus::HumanReview, 42);
        assert_eq!(names(&actions), vec!["Escalation Triggered", "Request Parked for Review"]);
        assert_eq!(actions[0].status, ActionStatus::Completed);
        assert_eq!(actions[1].status, ActionStatus::Pending);
        assert!(actions.iter().all(|a| a.executor == Executor::AiAgent));
    }

    #[test]
    fn test_pending_seeds_nothing() {
        assert!(seed_actions(RequestStatus::Pending, 42).is_empty());
    }
}

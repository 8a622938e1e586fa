//! Dashboard KPIs over a set of requests

use crate::ReviewReason;
use aries_domain::{DecisionOwner, PriceChangeRequest, RequestStatus};
use std::collections::BTreeMap;

/// Headline numbers for a batch of requests
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TriageMetrics {
    /// All requests
    pub total: usize,

    /// Processed, Auto-Approved and Auto-Rejected requests
    pub processed: usize,

    /// Pending requests
    pub pending: usize,

    /// Requests waiting on a reviewer
    pub human_review: usize,

    /// Auto-approved requests
    pub auto_approved: usize,

    /// Auto-rejected requests (by the agent or a reviewer)
    pub rejected: usize,

    /// Settled requests the agent decided on its own
    pub ai_decisions: usize,

    /// Settled requests a reviewer decided
    pub human_decisions: usize,

    /// Mean margin impact in percent (0 when there are no requests)
    pub avg_margin_impact: f64,

    /// Human review requests per review reason
    pub review_reasons: BTreeMap<ReviewReason, usize>,
}

impl TriageMetrics {
    /// Compute metrics for a batch of requests
    pub fn from_requests<'a>(requests: impl IntoIterator<Item = &'a PriceChangeRequest>) -> Self {
        let mut metrics = TriageMetrics::default();
        let mut margin_sum = 0.0;

        for request in requests {
            metrics.total += 1;
            margin_sum += request.margin_impact_pct;

            if request.status.is_settled() {
                metrics.processed += 1;
                match request.decision_owner {
                    DecisionOwner::AiAgent => metrics.ai_decisions += 1,
                    DecisionOwner::Human => metrics.human_decisions += 1,
                    DecisionOwner::PendingHuman => {}
                }
            }
            match request.status {
                RequestStatus::Pending => metrics.pending += 1,
                RequestStatus::AutoApproved => metrics.auto_approved += 1,
                RequestStatus::AutoRejected => metrics.rejected += 1,
                RequestStatus::HumanReview => {
                    metrics.human_review += 1;
                    *metrics
                        .review_reasons
                        .entry(ReviewReason::of(request))
                        .or_insert(0) += 1;
                }
                RequestStatus::Processed => {}
            }
        }

        if metrics.total > 0 {
            metrics.avg_margin_impact = margin_sum / metrics.total as f64;
        }
        metrics
    }

    /// Share of requests settled without a human, in percent
    pub fn automation_rate(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.ai_decisions as f64 / self.total as f64 * 100.0
    }

    /// Generate a summary report
    pub fn summary(&self) -> String {
        let mut lines = vec![
            "Triage Metrics Summary".to_string(),
            "======================".to_string(),
            format!("Total requests: {}", self.total),
            format!("Processed: {}", self.processed),
            format!("Pending: {}", self.pending),
            format!("Human review: {}", self.human_review),
            format!("Auto-approved: {}", self.auto_approved),
            format!("Rejected: {}", self.rejected),
            format!("Decided by agent: {}", self.ai_decisions),
            format!("Decided by reviewer: {}", self.human_decisions),
            format!("Average margin impact: {:.2}%", self.avg_margin_impact),
        ];

        if !self.review_reasons.is_empty() {
            lines.push(String::new());
            lines.push("Human review by reason:".to_string());
            for (reason, count) in &self.review_reasons {
                lines.push(format!("  {}: {}", reason, count));
            }
        }

        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{resolve, Classifier};
    use aries_domain::{HumanDecision, Intake, RequestAttributes, Vendor, VendorCategory};

    fn classified(category: VendorCategory, trust: f64, price: f64, margin: f64, confidence: f64) -> PriceChangeRequest {
        let attributes = RequestAttributes {
            vendor: Vendor::new("Initech Hydraulics", category, trust),
            price_change_pct: price,
            margin_impact_pct: margin,
            confidence_pct: confidence,
        };
        Classifier::default_config()
            .classify_intake(Intake::new(attributes, 0, 10), 0)
            .unwrap()
    }

    #[test]
    fn test_empty_metrics() {
        let metrics = TriageMetrics::from_requests(&Vec::<PriceChangeRequest>::new());
        assert_eq!(metrics.total, 0);
        assert_eq!(metrics.avg_margin_impact, 0.0);
        assert_eq!(metrics.automation_rate(), 0.0);
    }

    #[test]
    fn test_counts_by_status() {
        let requests = vec![
            classified(VendorCategory::Strategic, 95.0, 2.0, 0.5, 92.0),   // auto-approved
            classified(VendorCategory::NonStrategic, 80.0, 4.0, -1.5, 64.0), // auto-rejected
            classified(VendorCategory::NonStrategic, 80.0, 6.0, -2.5, 78.0), // pending
            classified(VendorCategory::Unknown, 30.0, 12.0, -6.5, 65.0),   // human review
        ];

        let metrics = TriageMetrics::from_requests(&requests);
        assert_eq!(metrics.total, 4);
        assert_eq!(metrics.auto_approved, 1);
        assert_eq!(metrics.rejected, 1);
        assert_eq!(metrics.pending, 1);
        assert_eq!(metrics.human_review, 1);
        assert_eq!(metrics.processed, 2);
        assert_eq!(metrics.avg_margin_impact, -2.5);
        assert_eq!(metrics.review_reasons.get(&ReviewReason::UnknownSender), Some(&1));
        assert_eq!(metrics.ai_decisions, 2);
        assert_eq!(metrics.human_decisions, 0);
        assert_eq!(metrics.automation_rate(), 50.0);
    }

    #[test]
    fn test_reviewer_rejection_is_not_automated() {
        let mut request = classified(VendorCategory::Unknown, 30.0, 12.5, -6.2, 65.0);
        resolve(
            &mut request,
            HumanDecision::Reject,
            None,
            Some("Contract terms not aligned with company policy"),
            60,
        )
        .unwrap();

        let metrics = TriageMetrics::from_requests(&[request]);
        assert_eq!(metrics.rejected, 1);
        assert_eq!(metrics.human_decisions, 1);
        assert_eq!(metrics.ai_decisions, 0);
        assert_eq!(metrics.automation_rate(), 0.0);
    }

    #[test]
    fn test_agent_processed_counts_as_automated() {
        let mut request = classified(VendorCategory::Strategic, 95.0, 2.0, 0.5, 92.0);
        request.status = RequestStatus::Processed;

        let metrics = TriageMetrics::from_requests(&[request]);
        assert_eq!(metrics.auto_approved, 0);
        assert_eq!(metrics.ai_decisions, 1);
        assert_eq!(metrics.automation_rate(), 100.0);
    }

    #[test]
    fn test_summary() {
        let requests = vec![classified(VendorCategory::Unknown, 30.0, 12.0, -6.5, 65.0)];
        let summary = TriageMetrics::from_requests(&requests).summary();

        assert!(summary.contains("Total requests: 1"));
        assert!(summary.contains("Human review: 1"));
        assert!(summary.contains("Average margin impact: -6.50%"));
        assert!(summary.contains("Unknown Sender: 1"));
    }
}

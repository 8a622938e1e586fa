//! Why a request is waiting on a human, and the order reviewers see them in

use aries_domain::{PriceChangeRequest, RequestStatus, Trigger, VendorCategory};
use std::fmt;

/// Review queue category for a request in human review
///
/// Categories are checked in declaration order; the first match wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ReviewReason {
    /// Sender not in the approved vendor list
    UnknownSender,

    /// Price change breaches the margin threshold
    MarginBreach,

    /// Required documentation incomplete
    MissingInformation,

    /// Anything else
    Other,
}

impl ReviewReason {
    /// All reasons, in priority order
    pub const ALL: [ReviewReason; 4] = [
        ReviewReason::UnknownSender,
        ReviewReason::MarginBreach,
        ReviewReason::MissingInformation,
        ReviewReason::Other,
    ];

    /// Categorize a request
    pub fn of(request: &PriceChangeRequest) -> Self {
        let triggers = &request.triggers;

        if request.vendor.category == VendorCategory::Unknown
            || triggers.contains(Trigger::UnknownVendor)
        {
            ReviewReason::UnknownSender
        } else if triggers.contains(Trigger::HighMarginImpact)
            || triggers.contains(Trigger::SignificantPriceIncrease)
        {
            ReviewReason::MarginBreach
        } else if !request.missing_items.is_empty() {
            ReviewReason::MissingInformation
        } else {
            ReviewReason::Other
        }
    }

    /// Short filter key (`unknown`, `margin`, `missing`, `other`)
    pub fn key(&self) -> &'static str {
        match self {
            ReviewReason::UnknownSender => "unknown",
            ReviewReason::MarginBreach => "margin",
            ReviewReason::MissingInformation => "missing",
            ReviewReason::Other => "other",
        }
    }

    /// Parse a filter key
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.key() == s.trim().to_lowercase())
    }

    /// Headline shown in the queue
    pub fn title(&self) -> &'static str {
        match self {
            ReviewReason::UnknownSender => "Unknown Sender",
            ReviewReason::MarginBreach => "Margin Threshold Breach",
            ReviewReason::MissingInformation => "Missing Information",
            ReviewReason::Other => "Manual Review Required",
        }
    }

    /// Longer explanation; the margin text cites the configured threshold
    pub fn description(&self, margin_erosion_threshold: f64) -> String {
        match self {
            ReviewReason::UnknownSender => {
                "Sender not in approved vendor list. Manual verification required.".to_string()
            }
            ReviewReason::MarginBreach => format!(
                "Price change exceeds {}% margin impact threshold.",
                margin_erosion_threshold
            ),
            ReviewReason::MissingInformation => {
                "Required documentation incomplete. Additional details needed from vendor."
                    .to_string()
            }
            ReviewReason::Other => "This request requires human review.".to_string(),
        }
    }
}

impl fmt::Display for ReviewReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Human review requests, most urgent SLA first, optionally narrowed to one reason
///
/// Ties on SLA go to the request received earliest.
pub fn review_queue(
    requests: impl IntoIterator<Item = PriceChangeRequest>,
    reason: Option<ReviewReason>,
) -> Vec<PriceChangeRequest> {
    let mut queue: Vec<PriceChangeRequest> = requests
        .into_iter()
        .filter(|r| r.status == RequestStatus::HumanReview)
        .filter(|r| reason.is_none_or(|wanted| ReviewReason::of(r) == wanted))
        .collect();

    queue.sort_by(|a, b| {
        a.sla_hours
            .cmp(&b.sla_hours)
            .then(a.received_at.cmp(&b.received_at))
    });
    queue
}

//! Catalog of reasons the AI agent cites when it rejects a request

use std::fmt;

/// A standard rejection reason
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RejectionReason {
    /// Increase above the auto-rejection ceiling
    PriceIncreaseExceedsThreshold {
        /// Ceiling in percent
        threshold: f64,
    },

    /// Vendor gave no adequate justification
    InsufficientJustification,

    /// Another supplier offers a better price
    AlternativeSupplierAvailable,

    /// Terms conflict with company policy
    ContractTermsMisaligned,

    /// Vendor is not approved for the category
    VendorNotApproved,

    /// Documentation needed to verify the price is missing
    MissingDocumentation,

    /// Price history does not add up
    InconsistentPricingHistory,

    /// Margin erosion beyond acceptable limits
    MarginErosionBeyondLimits,
}

impl RejectionReason {
    /// The full catalog, with the default 15% ceiling
    pub const CATALOG: [RejectionReason; 8] = [
        RejectionReason::PriceIncreaseExceedsThreshold { threshold: 15.0 },
        RejectionReason::InsufficientJustification,
        RejectionReason::AlternativeSupplierAvailable,
        RejectionReason::ContractTermsMisaligned,
        RejectionReason::VendorNotApproved,
        RejectionReason::MissingDocumentation,
        RejectionReason::InconsistentPricingHistory,
        RejectionReason::MarginErosionBeyondLimits,
    ];
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectionReason::PriceIncreaseExceedsThreshold { threshold } => write!(
                f,
                "Price increase exceeds acceptable threshold of {}%",
                threshold
            ),
            RejectionReason::InsufficientJustification => {
                f.write_str("Insufficient justification provided for the requested change")
            }
            RejectionReason::AlternativeSupplierAvailable => {
                f.write_str("Alternative supplier available at better pricing")
            }
            RejectionReason::ContractTermsMisaligned => {
                f.write_str("Contract terms not aligned with company policy")
            }
            RejectionReason::VendorNotApproved => {
                f.write_str("Vendor not approved for this product category")
            }
            RejectionReason::MissingDocumentation => {
                f.write_str("Missing required documentation for price verification")
            }
            RejectionReason::InconsistentPricingHistory => {
                f.write_str("Historical pricing data shows inconsistency")
            }
            RejectionReason::MarginErosionBeyondLimits => {
                f.write_str("Margin erosion beyond acceptable limits")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_text() {
        let texts: Vec<String> = RejectionReason::CATALOG.iter().map(|r| r.to_string()).collect();
        assert_eq!(texts[0], "Price increase exceeds acceptable threshold of 15%");
        assert_eq!(texts[7], "Margin erosion beyond acceptable limits");
        assert_eq!(texts.len(), 8);
    }

    #[test]
    fn test_threshold_follows_config() {
        let reason = RejectionReason::PriceIncreaseExceedsThreshold { threshold: 12.5 };
        assert_eq!(
            reason.to_string(),
            "Price increase exceeds acceptable threshold of 12.5%"
        );
    }
}

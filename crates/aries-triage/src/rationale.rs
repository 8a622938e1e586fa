//! Rationale generation
//!
//! Four sentences, always in this order, joined by single spaces:
//! vendor classification, price direction, margin impact, agent confidence.

use crate::TriageConfig;
use aries_domain::{RequestAttributes, VendorCategory};

/// Build the rationale for a set of attributes
pub fn build_rationale(attributes: &RequestAttributes, config: &TriageConfig) -> String {
    rationale_clauses(attributes, config).join(" ")
}

/// The four rationale clauses, in order
pub fn rationale_clauses(attributes: &RequestAttributes, config: &TriageConfig) -> [String; 4] {
    let vendor = &attributes.vendor;
    let vendor_clause = match vendor.category {
        VendorCategory::Strategic => format!(
            "Vendor \"{}\" is classified as Strategic with trust score {}/100.",
            vendor.name,
            number(vendor.trust_score)
        ),
        VendorCategory::Unknown => {
            "Sender not recognized in vendor database. Manual verification recommended.".to_string()
        }
        VendorCategory::NonStrategic => format!(
            "Non-strategic vendor with trust score {}/100.",
            number(vendor.trust_score)
        ),
    };

    let price = attributes.price_change_pct;
    let price_clause = if price > 0.0 {
        format!("Requested price increase of {}% detected.", number(price))
    } else {
        format!("Price reduction of {}% benefits margin.", number(price.abs()))
    };

    let margin = attributes.margin_impact_pct;
    let margin_clause = if margin.abs() > config.rationale_margin_flag_pct {
        format!("Significant margin impact of {}% flagged for review.", number(margin))
    } else {
        format!("Margin impact of {}% within acceptable threshold.", number(margin))
    };

    let confidence_clause = format!(
        "Agent confidence: {}% based on historical patterns and policy alignment.",
        number(attributes.confidence_pct)
    );

    [vendor_clause, price_clause, margin_clause, confidence_clause]
}

/// Shortest decimal form, with negative zero printed as `0`
fn number(value: f64) -> String {
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{}", value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use aries_domain::Vendor;

    fn attributes(category: VendorCategory, trust: f64, price: f64, margin: f64, confidence: f64) -> RequestAttributes {
        RequestAttributes {
            vendor: Vendor::new("Apex Industrial Supply", category, trust),
            price_change_pct: price,
            margin_impact_pct: margin,
            confidence_pct: confidence,
        }
    }

    #[test]
    fn test_strategic_rationale() {
        let rationale = build_rationale(
            &attributes(VendorCategory::Strategic, 95.0, 2.0, 0.6, 92.0),
            &TriageConfig::default(),
        );

        assert_eq!(
            rationale,
            "Vendor \"Apex Industrial Supply\" is classified as Strategic with trust score 95/100. \
             Requested price increase of 2% detected. \
             Margin impact of 0.6% within acceptable threshold. \
             Agent confidence: 92% based on historical patterns and policy alignment."
        );
    }

    #[test]
    fn test_unknown_rationale() {
        let rationale = build_rationale(
            &attributes(VendorCategory::Unknown, 30.0, 12.5, -6.2, 65.0),
            &TriageConfig::default(),
        );

        assert_eq!(
            rationale,
            "Sender not recognized in vendor database. Manual verification recommended. \
             Requested price increase of 12.5% detected. \
             Significant margin impact of -6.2% flagged for review. \
             Agent confidence: 65% based on historical patterns and policy alignment."
        );
    }

    #[test]
    fn test_price_reduction_and_zero() {
        let config = TriageConfig::default();

        let clauses = rationale_clauses(&attributes(VendorCategory::NonStrategic, 64.0, -3.5, 1.4, 77.0), &config);
        assert_eq!(clauses[0], "Non-strategic vendor with trust score 64/100.");
        assert_eq!(clauses[1], "Price reduction of 3.5% benefits margin.");

        let clauses = rationale_clauses(&attributes(VendorCategory::NonStrategic, 64.0, 0.0, -0.0, 77.0), &config);
        assert_eq!(clauses[1], "Price reduction of 0% benefits margin.");
        assert_eq!(clauses[2], "Margin impact of 0% within acceptable threshold.");
    }

    #[test]
    fn test_margin_flag_boundary() {
        let config = TriageConfig::default();

        let clauses = rationale_clauses(&attributes(VendorCategory::NonStrategic, 64.0, 4.0, -3.0, 77.0), &config);
        assert_eq!(clauses[2], "Margin impact of -3% within acceptable threshold.");

        let clauses = rationale_clauses(&attributes(VendorCategory::NonStrategic, 64.0, 4.0, -3.01, 77.0), &config);
        assert_eq!(clauses[2], "Significant margin impact of -3.01% flagged for review.");
    }
}

//! Triage configuration
//!
//! Every threshold the classifier compares against lives here so the policy
//! can be tuned without touching the rules.

use crate::TriageError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default margin erosion threshold, in percentage points
pub const MARGIN_EROSION_THRESHOLD: f64 = 5.0;

/// Configuration for the triage classifier
///
/// # Examples
///
/// ```
/// use aries_triage::TriageConfig;
///
/// let config = TriageConfig::default();
/// assert_eq!(config.margin_erosion_threshold, 5.0);
///
/// let config: TriageConfig = toml::from_str("margin_erosion_threshold = 4.0").unwrap();
/// assert_eq!(config.margin_erosion_threshold, 4.0);
/// assert_eq!(config.significant_increase_pct, 10.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TriageConfig {
    /// Absolute margin impact (percent) above which `High Margin Impact` fires
    pub margin_erosion_threshold: f64,

    /// Price increase (percent) above which `Significant Price Increase` fires
    pub significant_increase_pct: f64,

    /// Trust scores below this count as an unknown vendor
    pub untrusted_vendor_below: f64,

    /// Auto-approval needs confidence strictly above this
    pub auto_approve_min_confidence: f64,

    /// Auto-approval needs a price change strictly below this
    pub auto_approve_max_increase: f64,

    /// Confidence strictly below this lands in the rejection bucket
    pub auto_reject_below_confidence: f64,

    /// Price increase strictly above this lands in the rejection bucket
    pub auto_reject_above_increase: f64,

    /// Absolute margin impact above which the rationale flags the margin
    pub rationale_margin_flag_pct: f64,

    /// Treat `Strategic Vendor` as an escalating trigger
    pub escalate_strategic_vendors: bool,

    /// Reviewer pool for escalated requests
    pub reviewers: Vec<String>,
}

fn default_reviewers() -> Vec<String> {
    vec![
        "Sarah Chen".to_string(),
        "Michael Torres".to_string(),
        "Emily Watson".to_string(),
    ]
}

impl Default for TriageConfig {
    fn default() -> Self {
        Self {
            margin_erosion_threshold: MARGIN_EROSION_THRESHOLD,
            significant_increase_pct: 10.0,
            untrusted_vendor_below: 50.0,
            auto_approve_min_confidence: 85.0,
            auto_approve_max_increase: 5.0,
            auto_reject_below_confidence: 70.0,
            auto_reject_above_increase: 15.0,
            rationale_margin_flag_pct: 3.0,
            escalate_strategic_vendors: false,
            reviewers: default_reviewers(),
        }
    }
}

impl TriageConfig {
    /// Tighter thresholds; strategic vendors always go to a human
    pub fn strict() -> Self {
        Self {
            margin_erosion_threshold: 3.0,
            significant_increase_pct: 8.0,
            untrusted_vendor_below: 60.0,
            auto_approve_min_confidence: 90.0,
            auto_approve_max_increase: 3.0,
            auto_reject_below_confidence: 75.0,
            auto_reject_above_increase: 12.0,
            rationale_margin_flag_pct: 2.0,
            escalate_strategic_vendors: true,
            reviewers: default_reviewers(),
        }
    }

    /// Looser thresholds for low-value categories
    pub fn lenient() -> Self {
        Self {
            margin_erosion_threshold: 8.0,
            significant_increase_pct: 15.0,
            untrusted_vendor_below: 40.0,
            auto_approve_min_confidence: 80.0,
            auto_approve_max_increase: 8.0,
            auto_reject_below_confidence: 60.0,
            auto_reject_above_increase: 20.0,
            rationale_margin_flag_pct: 5.0,
            escalate_strategic_vendors: false,
            reviewers: default_reviewers(),
        }
    }

    /// Parse and validate a TOML document
    pub fn from_toml_str(contents: &str) -> Result<Self, TriageError> {
        let config: TriageConfig = toml::from_str(contents)
            .map_err(|e| TriageError::Config(format!("Failed to parse triage config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, TriageError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            TriageError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&contents)
    }

    /// Check thresholds are usable
    pub fn validate(&self) -> Result<(), TriageError> {
        let thresholds = [
            ("margin_erosion_threshold", self.margin_erosion_threshold),
            ("significant_increase_pct", self.significant_increase_pct),
            ("untrusted_vendor_below", self.untrusted_vendor_below),
            ("auto_approve_min_confidence", self.auto_approve_min_confidence),
            ("auto_approve_max_increase", self.auto_approve_max_increase),
            ("auto_reject_below_confidence", self.auto_reject_below_confidence),
            ("auto_reject_above_increase", self.auto_reject_above_increase),
            ("rationale_margin_flag_pct", self.rationale_margin_flag_pct),
        ];
        for (name, value) in thresholds {
            if !value.is_finite() {
                return Err(TriageError::Config(format!("{} must be finite", name)));
            }
        }

        let bounded = [
            ("untrusted_vendor_below", self.untrusted_vendor_below),
            ("auto_approve_min_confidence", self.auto_approve_min_confidence),
            ("auto_reject_below_confidence", self.auto_reject_below_confidence),
        ];
        for (name, value) in bounded {
            if !(0.0..=100.0).contains(&value) {
                return Err(TriageError::Config(format!(
                    "{} must be within [0, 100], got {}",
                    name, value
                )));
            }
        }

        if self.margin_erosion_threshold < 0.0 || self.rationale_margin_flag_pct < 0.0 {
            return Err(TriageError::Config(
                "margin thresholds must be non-negative".to_string(),
            ));
        }

        if self.reviewers.iter().all(|r| r.trim().is_empty()) {
            return Err(TriageError::Config(
                "at least one reviewer is required".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TriageConfig::default();
        assert_eq!(config.margin_erosion_threshold, MARGIN_EROSION_THRESHOLD);
        assert_eq!(config.significant_increase_pct, 10.0);
        assert_eq!(config.untrusted_vendor_below, 50.0);
        assert_eq!(config.reviewers.len(), 3);
        assert!(!config.escalate_strategic_vendors);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_strict_config() {
        let config = TriageConfig::strict();
        assert!(config.margin_erosion_threshold < TriageConfig::default().margin_erosion_threshold);
        assert!(config.escalate_strategic_vendors);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_lenient_config() {
        let config = TriageConfig::lenient();
        assert!(config.margin_erosion_threshold > TriageConfig::default().margin_erosion_threshold);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = TriageConfig::from_toml_str(
            r#"
            margin_erosion_threshold = 4.5
            reviewers = ["Dana Reyes"]
            "#,
        )
        .unwrap();

        assert_eq!(config.margin_erosion_threshold, 4.5);
        assert_eq!(config.reviewers, vec!["Dana Reyes".to_string()]);
        assert_eq!(config.auto_reject_above_increase, 15.0);
    }

    #[test]
    fn test_invalid_configs_rejected() {
        let result = TriageConfig::from_toml_str("reviewers = []");
        assert!(matches!(result, Err(TriageError::Config(_))));

        let result = TriageConfig::from_toml_str("auto_approve_min_confidence = 120.0");
        assert!(matches!(result, Err(TriageError::Config(_))));

        let result = TriageConfig::from_toml_str("margin_erosion_threshold = \"five\"");
        assert!(matches!(result, Err(TriageError::Config(_))));
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("triage.toml");
        std::fs::write(&path, "significant_increase_pct = 12.0\n").unwrap();

        let config = TriageConfig::from_file(&path).unwrap();
        assert_eq!(config.significant_increase_pct, 12.0);

        let missing = TriageConfig::from_file(dir.path().join("absent.toml"));
        assert!(matches!(missing, Err(TriageError::Config(_))));
    }

    #[test]
    fn test_serde_roundtrip() {
        let config = TriageConfig::strict();
        let serialized = serde_json::to_string(&config).unwrap();
        let deserialized: TriageConfig = serde_json::from_str(&serialized).unwrap();
        assert_eq!(config, deserialized);
    }
}

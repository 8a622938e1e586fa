//! Generator configuration

use crate::GeneratorError;
use serde::{Deserialize, Serialize};

/// Settings for a synthetic request batch
///
/// # Examples
///
/// ```
/// use aries_generator::GeneratorConfig;
///
/// let config = GeneratorConfig::default();
/// assert_eq!(config.count, 75);
/// assert_eq!(config.id_prefix, "PCR-2024");
/// assert!(config.seed.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Number of requests per batch
    pub count: u32,

    /// RNG seed; a random one is drawn (and logged) when unset
    pub seed: Option<u64>,

    /// Prefix for sequential ids (`<prefix>-0001`, ...)
    pub id_prefix: String,

    /// Requests are received up to this many days before now
    pub max_age_days: u32,

    /// Upper bound (inclusive) for the SLA, in hours
    pub max_sla_hours: u32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            count: 75,
            seed: None,
            id_prefix: "PCR-2024".to_string(),
            max_age_days: 7,
            max_sla_hours: 48,
        }
    }
}

impl GeneratorConfig {
    /// Same settings with a fixed seed
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), GeneratorError> {
        if self.count == 0 || self.count > 9999 {
            return Err(GeneratorError::Config(format!(
                "count must be between 1 and 9999, got {}",
                self.count
            )));
        }

        let prefix = self.id_prefix.trim();
        if prefix.is_empty() || prefix.chars().any(char::is_whitespace) {
            return Err(GeneratorError::Config(format!(
                "id_prefix '{}' must be non-empty and contain no whitespace",
                self.id_prefix
            )));
        }

        if self.max_age_days == 0 {
            return Err(GeneratorError::Config(
                "max_age_days must be at least 1".to_string(),
            ));
        }

        if self.max_sla_hours == 0 {
            return Err(GeneratorError::Config(
                "max_sla_hours must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}

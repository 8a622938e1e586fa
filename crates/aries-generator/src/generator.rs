//! Synthetic upstream source of price change requests

use crate::{default_vendors, GeneratorConfig, GeneratorError, Result};
use aries_domain::{Intake, RequestAttributes, RequestId, RequiredItem, Vendor};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

const SECONDS_PER_HOUR: u64 = 3_600;
const SECONDS_PER_DAY: u64 = 24 * SECONDS_PER_HOUR;

/// Seeded generator of intake records
///
/// The same seed and `now` always produce the same batch.
///
/// # Examples
///
/// ```
/// use aries_generator::{GeneratorConfig, RequestGenerator};
///
/// let mut generator = RequestGenerator::new(GeneratorConfig::seeded(7)).unwrap();
/// let batch = generator.generate_at(1_700_000_000);
/// assert_eq!(batch.len(), 75);
/// assert!(batch.windows(2).all(|w| w[0].received_at >= w[1].received_at));
/// ```
#[derive(Debug, Clone)]
pub struct RequestGenerator {
    config: GeneratorConfig,
    vendors: Vec<Vendor>,
    seed: u64,
    rng: StdRng,
}

impl RequestGenerator {
    /// Create a generator over the default vendor directory
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        Self::with_vendors(config, default_vendors())
    }

    /// Create a generator over a custom vendor directory
    pub fn with_vendors(config: GeneratorConfig, vendors: Vec<Vendor>) -> Result<Self> {
        config.validate()?;
        if vendors.is_empty() {
            return Err(GeneratorError::NoVendors);
        }

        let seed = config.seed.unwrap_or_else(rand::random);
        Ok(Self {
            config,
            vendors,
            seed,
            rng: StdRng::seed_from_u64(seed),
        })
    }

    /// Seed in use (the configured one, or the one drawn at construction)
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Get the active configuration
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate a batch received relative to the current time
    pub fn generate(&mut self) -> Vec<Intake> {
        self.generate_at(aries_triage::current_timestamp())
    }

    /// Generate a batch received relative to `now`, newest first
    pub fn generate_at(&mut self, now: u64) -> Vec<Intake> {
        let mut batch: Vec<Intake> = (1..=self.config.count)
            .map(|number| self.next_intake(number, now))
            .collect();
        batch.sort_by(|a, b| b.received_at.cmp(&a.received_at));

        info!(
            count = batch.len(),
            seed = self.seed,
            prefix = %self.config.id_prefix,
            "generated synthetic requests"
        );
        batch
    }

    fn next_intake(&mut self, number: u32, now: u64) -> Intake {
        let vendor = self.vendors[self.rng.random_range(0..self.vendors.len())].clone();

        let price_change_pct = round_to(self.rng.random_range(-5.0..20.0), 1);
        let erosion: f64 = self.rng.random_range(0.3..0.7);
        let margin_impact_pct = normalize_zero(round_to(-price_change_pct * erosion, 2));
        let confidence_pct = (60.0 + self.rng.random::<f64>() * 40.0).floor();

        let days_ago = self.rng.random_range(0..u64::from(self.config.max_age_days));
        let hours_ago = self.rng.random_range(0..24);
        let received_at = now.saturating_sub(days_ago * SECONDS_PER_DAY + hours_ago * SECONDS_PER_HOUR);
        let sla_hours = self.rng.random_range(1..=self.config.max_sla_hours);

        let id = RequestId::sequential(&self.config.id_prefix, number);
        let attributes = RequestAttributes {
            vendor,
            price_change_pct,
            margin_impact_pct,
            confidence_pct,
        };

        let mut intake = Intake::new(attributes, received_at, sla_hours);
        intake.missing_items = missing_items(&id);
        intake.id = Some(id);
        intake
    }
}

/// Required items a request id's (simulated) email leaves out
///
/// Deterministic in the id: item `idx` is missing when
/// `(sum of UTF-16 code units + idx) % 3 == 0`.
pub fn missing_items(id: &RequestId) -> Vec<RequiredItem> {
    let hash: u64 = id.as_str().encode_utf16().map(u64::from).sum();
    RequiredItem::ALL
        .into_iter()
        .enumerate()
        .filter(|(idx, _)| (hash + *idx as u64) % 3 == 0)
        .map(|(_, item)| item)
        .collect()
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

fn normalize_zero(value: f64) -> f64 {
    if value == 0.0 {
        0.0
    } else {
        value
    }
}

//! Randomized disposition policy for demo data
//!
//! Produces the status mix a live desk shows: most triggered requests go to
//! a reviewer but some slip through, and each bucket spreads over all the
//! statuses it allows. Branch selection itself stays with the classifier,
//! so every outcome is still one the status policy permits.

use aries_domain::{RequestAttributes, TriggerSet};
use aries_triage::policy::{AmbiguousOutcome, ConfidentOutcome, DoubtfulOutcome};
use aries_triage::{DispositionPolicy, RejectionReason, TriageConfig};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use std::sync::{Mutex, MutexGuard};

/// Share of triggered requests sent to a reviewer
pub const ESCALATION_RATE: f64 = 0.7;

/// Share of confident requests auto-approved rather than processed
pub const AUTO_APPROVE_RATE: f64 = 0.7;

/// Share of doubtful requests auto-rejected rather than held
pub const AUTO_REJECT_RATE: f64 = 0.5;

/// Seeded coin-flip policy
///
/// # Examples
///
/// ```
/// use aries_generator::RandomizedPolicy;
/// use aries_triage::{Classifier, TriageConfig};
///
/// let classifier = Classifier::with_policy(TriageConfig::default(), RandomizedPolicy::seeded(7));
/// assert_eq!(classifier.config().margin_erosion_threshold, 5.0);
/// ```
#[derive(Debug)]
pub struct RandomizedPolicy {
    rng: Mutex<StdRng>,
}

impl RandomizedPolicy {
    /// Create a policy with a fixed seed
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    fn rng(&self) -> MutexGuard<'_, StdRng> {
        // RNG state is still usable after a poisoned lock
        self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn chance(&self, rate: f64) -> bool {
        self.rng().random::<f64>() < rate
    }
}

impl DispositionPolicy for RandomizedPolicy {
    fn escalate(
        &self,
        _attributes: &RequestAttributes,
        triggers: &TriggerSet,
        _config: &TriageConfig,
    ) -> bool {
        !triggers.is_empty() && self.chance(ESCALATION_RATE)
    }

    fn confident(&self, _attributes: &RequestAttributes, _config: &TriageConfig) -> ConfidentOutcome {
        if self.chance(AUTO_APPROVE_RATE) {
            ConfidentOutcome::AutoApproved
        } else {
            ConfidentOutcome::Processed
        }
    }

    fn doubtful(
        &self,
        _attributes: &RequestAttributes,
        _triggers: &TriggerSet,
        config: &TriageConfig,
    ) -> DoubtfulOutcome {
        if !self.chance(AUTO_REJECT_RATE) {
            return DoubtfulOutcome::Pending;
        }

        let reason = match RejectionReason::CATALOG.choose(&mut *self.rng()) {
            Some(RejectionReason::PriceIncreaseExceedsThreshold { .. }) | None => {
                RejectionReason::PriceIncreaseExceedsThreshold {
                    threshold: config.auto_reject_above_increase,
                }
            }
            Some(reason) => *reason,
        };
        DoubtfulOutcome::AutoRejected(reason)
    }

    fn ambiguous(&self, _attributes: &RequestAttributes, _config: &TriageConfig) -> AmbiguousOutcome {
        const OUTCOMES: [AmbiguousOutcome; 3] = [
            AmbiguousOutcome::Processed,
            AmbiguousOutcome::Pending,
            AmbiguousOutcome::AutoApproved,
        ];
        OUTCOMES[self.rng().random_range(0..OUTCOMES.len())]
    }

    fn assign_reviewer(&self, _attributes: &RequestAttributes, reviewers: &[String]) -> Option<String> {
        let pool: Vec<&String> = reviewers.iter().filter(|r| !r.trim().is_empty()).collect();
        pool.choose(&mut *self.rng()).map(|r| (*r).clone())
    }
}

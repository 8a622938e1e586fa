//! The in-memory triage desk a command works on.

use crate::cli::DatasetArgs;
use crate::config::Config;
use crate::error::Result;
use aries_domain::{RequestAttributes, TriggerSet};
use aries_generator::{RandomizedPolicy, RequestGenerator};
use aries_store::InMemoryStore;
use aries_triage::policy::{AmbiguousOutcome, ConfidentOutcome, DoubtfulOutcome};
use aries_triage::{
    current_timestamp, Classifier, DispositionPolicy, StandardPolicy, TriageConfig, TriageDesk,
};
use tracing::info;

/// Disposition policy selected on the command line.
#[derive(Debug)]
pub enum DeskPolicy {
    /// Deterministic production policy
    Standard(StandardPolicy),
    /// Seeded coin-flip policy for demo batches
    Randomized(RandomizedPolicy),
}

impl DispositionPolicy for DeskPolicy {
    fn escalate(
        &self,
        attributes: &RequestAttributes,
        triggers: &TriggerSet,
        config: &TriageConfig,
    ) -> bool {
        match self {
            DeskPolicy::Standard(p) => p.escalate(attributes, triggers, config),
            DeskPolicy::Randomized(p) => p.escalate(attributes, triggers, config),
        }
    }

    fn confident(&self, attributes: &RequestAttributes, config: &TriageConfig) -> ConfidentOutcome {
        match self {
            DeskPolicy::Standard(p) => p.confident(attributes, config),
            DeskPolicy::Randomized(p) => p.confident(attributes, config),
        }
    }

    fn doubtful(
        &self,
        attributes: &RequestAttributes,
        triggers: &TriggerSet,
        config: &TriageConfig,
    ) -> DoubtfulOutcome {
        match self {
            DeskPolicy::Standard(p) => p.doubtful(attributes, triggers, config),
            DeskPolicy::Randomized(p) => p.doubtful(attributes, triggers, config),
        }
    }

    fn ambiguous(&self, attributes: &RequestAttributes, config: &TriageConfig) -> AmbiguousOutcome {
        match self {
            DeskPolicy::Standard(p) => p.ambiguous(attributes, config),
            DeskPolicy::Randomized(p) => p.ambiguous(attributes, config),
        }
    }

    fn assign_reviewer(&self, attributes: &RequestAttributes, reviewers: &[String]) -> Option<String> {
        match self {
            DeskPolicy::Standard(p) => p.assign_reviewer(attributes, reviewers),
            DeskPolicy::Randomized(p) => p.assign_reviewer(attributes, reviewers),
        }
    }
}

/// Desk used by the CLI.
pub type Desk = TriageDesk<InMemoryStore, DeskPolicy>;

/// A seeded desk and the seed that produced it.
pub struct Session {
    /// The desk
    pub desk: Desk,
    /// Seed of the generated batch
    pub seed: u64,
}

/// Generate a batch and triage it into a fresh desk.
pub fn open_session(config: &Config, dataset: &DatasetArgs) -> Result<Session> {
    open_session_at(config, dataset, current_timestamp())
}

/// Same as [`open_session`], with batch and action times relative to `now`.
pub fn open_session_at(config: &Config, dataset: &DatasetArgs, now: u64) -> Result<Session> {
    let mut generator_config = config.generator.clone();
    if let Some(count) = dataset.count {
        generator_config.count = count;
    }
    if dataset.seed.is_some() {
        generator_config.seed = dataset.seed;
    }

    let mut generator = RequestGenerator::new(generator_config)?;
    let seed = generator.seed();

    let policy = if dataset.randomized {
        DeskPolicy::Randomized(RandomizedPolicy::seeded(seed))
    } else {
        DeskPolicy::Standard(StandardPolicy)
    };
    let classifier = Classifier::with_policy(config.triage.clone(), policy);
    let mut desk = TriageDesk::new(classifier, InMemoryStore::new());

    for intake in generator.generate_at(now) {
        desk.intake_at(intake, now)?;
    }

    info!(
        seed,
        requests = desk.store().len(),
        randomized = dataset.randomized,
        "desk ready"
    );
    Ok(Session { desk, seed })
}

//! ARIES Generator
//!
//! Synthetic upstream source for demos and load tests. Produces intake
//! records with realistic ranges (price change, margin erosion, agent
//! confidence, SLA, receipt time) from a seeded RNG, plus a randomized
//! disposition policy that gives a batch the status mix of a live desk.

#![warn(missing_docs)]

mod config;
mod error;
mod generator;
mod policy;
mod vendors;

pub use config::GeneratorConfig;
pub use error::{GeneratorError, Result};
pub use generator::{missing_items, RequestGenerator};
pub use policy::{RandomizedPolicy, AUTO_APPROVE_RATE, AUTO_REJECT_RATE, ESCALATION_RATE};
pub use vendors::default_vendors;

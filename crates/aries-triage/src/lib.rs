//! ARIES Triage
//!
//! Decides what happens to a price change request when it arrives, and what
//! happens when a reviewer acts on one that was escalated.
//!
//! The triage engine provides:
//! - Trigger detection (unknown vendor, strategic vendor, margin impact, price increase)
//! - The status policy (escalate, auto-approve, auto-reject, or hold)
//! - Rationale generation and audit action seeding
//! - The human decision transition (approve, reject, renegotiate)
//! - A review queue, a decision history and dashboard KPIs
//!
//! # Examples
//!
//! ```
//! use aries_domain::{HumanDecision, Intake, RequestAttributes, RequestStatus, Vendor, VendorCategory};
//! use aries_triage::{resolve, Classifier, TriageConfig};
//!
//! let classifier = Classifier::new(TriageConfig::default());
//! let attributes = RequestAttributes {
//!     vendor: Vendor::new("Unverified Trading Co", VendorCategory::Unknown, 30.0),
//!     price_change_pct: 12.5,
//!     margin_impact_pct: -6.2,
//!     confidence_pct: 65.0,
//! };
//!
//! let mut request = classifier.classify_intake(Intake::new(attributes, 0, 8), 0).unwrap();
//! assert_eq!(request.status, RequestStatus::HumanReview);
//!
//! resolve(&mut request, HumanDecision::Approve, Some("Verified by phone"), None, 60).unwrap();
//! assert_eq!(request.status, RequestStatus::Processed);
//! ```

#![warn(missing_docs)]

mod actions;
mod classifier;
mod config;
mod desk;
mod error;
mod history;
mod metrics;
mod notice;
pub mod policy;
pub mod rationale;
mod rejection;
mod review;
mod transition;

pub use actions::seed_actions;
pub use classifier::{ClassificationResult, Classifier};
pub use config::{TriageConfig, MARGIN_EROSION_THRESHOLD};
pub use desk::{current_timestamp, TriageDesk};
pub use error::TriageError;
pub use history::{decision_log, DecisionFilter, DecisionLogEntry, DecisionOutcome, LogEntryKind};
pub use metrics::TriageMetrics;
pub use notice::{missing_information_request, VendorNotice};
pub use policy::{DispositionPolicy, StandardPolicy};
pub use rejection::RejectionReason;
pub use review::{review_queue, ReviewReason};
pub use transition::resolve;

//! ARIES Domain Layer
//!
//! This crate contains the domain model for ARIES, the price change request
//! triage system. It has a single external dependency (`uuid`) and defines
//! the value objects and trait interfaces that all other layers depend upon.
//!
//! ## Key Concepts
//!
//! - **Price Change Request**: a vendor's ask to change a price, with its triage outcome
//! - **Trigger**: a named condition that puts a request up for escalation
//! - **Status / Decision Owner**: where the request sits and who decides it
//! - **Action Record**: append-only audit trail of what was done and by whom
//! - **Human Decision**: approve, reject or renegotiate a parked request
//!
//! ## Architecture
//!
//! - Pure data and invariants only
//! - Triage policy lives in `aries-triage`
//! - Storage implementations live in `aries-store`

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod action;
pub mod decision;
pub mod document;
pub mod request;
pub mod status;
pub mod traits;
pub mod trigger;
pub mod vendor;

// Re-exports for convenience
pub use action::{ActionRecord, ActionStatus, Executor};
pub use decision::HumanDecision;
pub use document::RequiredItem;
pub use request::{Intake, PriceChangeRequest, RequestAttributes, RequestId};
pub use status::{DecisionOwner, RequestStatus};
pub use trigger::{Trigger, TriggerSet};
pub use vendor::{Vendor, VendorCategory};

//! Trait definitions for external interactions
//!
//! These traits define the boundaries between domain logic and infrastructure.
//! Infrastructure implementations live in other crates.

use crate::{PriceChangeRequest, RequestId, RequestStatus};

/// Trait for storing and retrieving price change requests
///
/// Implemented by the infrastructure layer (aries-store)
pub trait RequestStore {
    /// Error type for store operations
    type Error;

    /// Insert a newly classified request
    fn insert_request(&mut self, request: PriceChangeRequest) -> Result<RequestId, Self::Error>;

    /// Get a request by ID
    fn get_request(&self, id: &RequestId) -> Result<Option<PriceChangeRequest>, Self::Error>;

    /// Replace a stored request, provided nobody updated it since
    /// `expected_version` was read. Returns the new version.
    fn update_request(
        &mut self,
        request: PriceChangeRequest,
        expected_version: u64,
    ) -> Result<u64, Self::Error>;

    /// Query requests matching criteria
    fn query_requests(&self, query: &RequestQuery) -> Result<Vec<PriceChangeRequest>, Self::Error>;
}

/// Query criteria for retrieving requests
#[derive(Debug, Clone, Default)]
pub struct RequestQuery {
    /// Filter by status
    pub status: Option<RequestStatus>,

    /// Case-insensitive substring on id or vendor name
    pub text: Option<String>,

    /// Maximum results to return
    pub limit: Option<usize>,
}

impl RequestQuery {
    /// Query for everything
    pub fn all() -> Self {
        Self::default()
    }

    /// Query for one status
    pub fn with_status(status: RequestStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    /// Check whether a request satisfies the filters (ignores `limit`)
    pub fn matches(&self, request: &PriceChangeRequest) -> bool {
        if let Some(status) = self.status {
            if request.status != status {
                return false;
            }
        }
        if let Some(text) = &self.text {
            if !request.matches_text(text) {
                return false;
            }
        }
        true
    }
}

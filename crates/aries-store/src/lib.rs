//! ARIES Store
//!
//! In-memory implementation of the `RequestStore` trait.
//!
//! Requests live only for the lifetime of the process. Updates are guarded
//! by a per-request version: a writer must present the version it read, and
//! the store refuses the write if someone else got there first.

#![warn(missing_docs)]

use aries_domain::traits::{RequestQuery, RequestStore};
use aries_domain::{PriceChangeRequest, RequestId};
use std::collections::HashMap;
use thiserror::Error;
use tracing::{debug, warn};

/// Errors that can occur in store operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A request with this id is already stored
    #[error("Duplicate request id: {0}")]
    Duplicate(RequestId),

    /// No request with this id
    #[error("Request not found: {0}")]
    NotFound(RequestId),

    /// The request changed since the caller read it
    #[error("Version conflict on {id}: expected {expected}, found {actual}")]
    VersionConflict {
        /// Request id
        id: RequestId,
        /// Version the caller read
        expected: u64,
        /// Version currently stored
        actual: u64,
    },
}

/// Result type for store operations
pub type Result<T> = std::result::Result<T, StoreError>;

/// In-memory request store, iterated in insertion order
#[derive(Debug, Default)]
pub struct InMemoryStore {
    requests: HashMap<RequestId, PriceChangeRequest>,
    order: Vec<RequestId>,
}

impl InMemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored requests
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// True when nothing is stored
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl RequestStore for InMemoryStore {
    type Error = StoreError;

    fn insert_request(&mut self, mut request: PriceChangeRequest) -> Result<RequestId> {
        if self.requests.contains_key(&request.id) {
            return Err(StoreError::Duplicate(request.id));
        }

        let id = request.id.clone();
        request.version = 0;
        self.order.push(id.clone());
        self.requests.insert(id.clone(), request);

        debug!(id = %id, "request stored");
        Ok(id)
    }

    fn get_request(&self, id: &RequestId) -> Result<Option<PriceChangeRequest>> {
        Ok(self.requests.get(id).cloned())
    }

    fn update_request(&mut self, mut request: PriceChangeRequest, expected_version: u64) -> Result<u64> {
        let stored = self
            .requests
            .get_mut(&request.id)
            .ok_or_else(|| StoreError::NotFound(request.id.clone()))?;

        if stored.version != expected_version {
            warn!(
                id = %request.id,
                expected = expected_version,
                actual = stored.version,
                "stale update refused"
            );
            return Err(StoreError::VersionConflict {
                id: request.id,
                expected: expected_version,
                actual: stored.version,
            });
        }

        let version = stored.version + 1;
        request.version = version;
        *stored = request;
        Ok(version)
    }

    fn query_requests(&self, query: &RequestQuery) -> Result<Vec<PriceChangeRequest>> {
        let limit = query.limit.unwrap_or(usize::MAX);
        Ok(self
            .order
            .iter()
            .filter_map(|id| self.requests.get(id))
            .filter(|request| query.matches(request))
            .take(limit)
            .cloned()
            .collect())
    }
}

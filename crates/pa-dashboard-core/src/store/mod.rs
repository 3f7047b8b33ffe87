//! Immutable request store backing every dashboard view.

use std::collections::HashSet;

use thiserror::Error;

use crate::models::{PaRequest, PaStatus};

/// Seed dataset bundled with the crate.
const SEED_REQUESTS: &str = include_str!("../../data/seed_requests.json");

/// Store errors.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Duplicate request ID: {0}")]
    DuplicateId(String),

    #[error("Request {0} was updated before it was submitted")]
    UpdatedBeforeSubmitted(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Read-only collection of PA requests in their original order.
#[derive(Debug, Clone, Default)]
pub struct RequestStore {
    requests: Vec<PaRequest>,
}

impl RequestStore {
    /// Build a store, validating IDs and timestamps.
    pub fn new(requests: Vec<PaRequest>) -> StoreResult<Self> {
        let mut seen = HashSet::with_capacity(requests.len());
        for request in &requests {
            if !seen.insert(request.id.as_str()) {
                return Err(StoreError::DuplicateId(request.id.clone()));
            }
            if request.last_updated < request.submitted_date {
                return Err(StoreError::UpdatedBeforeSubmitted(request.id.clone()));
            }
        }

        Ok(Self { requests })
    }

    /// Parse a JSON array of requests.
    pub fn from_json(json: &str) -> StoreResult<Self> {
        let requests: Vec<PaRequest> = serde_json::from_str(json)?;
        Self::new(requests)
    }

    /// Load the bundled seed dataset.
    pub fn seed() -> StoreResult<Self> {
        let store = Self::from_json(SEED_REQUESTS)?;
        log::info!("store: loaded {} seed requests", store.len());
        Ok(store)
    }

    /// All requests in original order.
    pub fn all(&self) -> &[PaRequest] {
        &self.requests
    }

    pub fn len(&self) -> usize {
        self.requests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }

    /// Look up a request by ID.
    pub fn get(&self, id: &str) -> Option<&PaRequest> {
        self.requests.iter().find(|request| request.id == id)
    }

    /// Distinct insurer names in order of first appearance.
    pub fn unique_insurers(&self) -> Vec<String> {
        let mut insurers: Vec<String> = Vec::new();
        for request in &self.requests {
            if !insurers.contains(&request.insurer_name) {
                insurers.push(request.insurer_name.clone());
            }
        }
        insurers
    }

    /// Status filter options in display order.
    pub fn status_options(&self) -> &'static [PaStatus] {
        &PaStatus::ALL
    }
}

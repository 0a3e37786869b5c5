//! Store state - pure data structure with no timers or I/O

use crate::models::{RequestStatus, Speaker};
use crate::store::error::StoreError;

/// Point-in-time view of the store, published to the App layer
#[derive(Debug, Clone, PartialEq)]
pub struct StoreSnapshot {
    pub speakers: Vec<Speaker>,
    pub status: RequestStatus,
    pub error: Option<String>,
}

/// Collection + request status + error slot. Mutated only by the store
/// actor; everything here is synchronous and side-effect free.
pub struct StoreState {
    speakers: Vec<Speaker>,
    status: RequestStatus,
    error: Option<String>,
}

impl StoreState {
    pub fn new(seed: Vec<Speaker>) -> Self {
        StoreState {
            speakers: seed,
            status: RequestStatus::Loading,
            error: None,
        }
    }

    pub fn snapshot(&self) -> StoreSnapshot {
        StoreSnapshot {
            speakers: self.speakers.clone(),
            status: self.status,
            error: self.error.clone(),
        }
    }

    pub fn contains(&self, id: u64) -> bool {
        self.speakers.iter().any(|s| s.id == id)
    }

    /// The initial load finished; `Loading -> Success`. Data is published
    /// unchanged from the seed.
    pub fn complete_load(&mut self) {
        debug_assert!(!self.status.is_terminal());
        self.status = RequestStatus::Success;
    }

    /// The initial load failed; `Loading -> Failure`. The collection keeps
    /// its last known value.
    pub fn fail_load(&mut self, message: impl Into<String>) {
        debug_assert!(!self.status.is_terminal());
        self.status = RequestStatus::Failure;
        self.error = Some(message.into());
    }

    /// Replace the record matching `updated.id` in place. Length and order
    /// of the collection are preserved; the request status is untouched.
    pub fn apply_update(&mut self, updated: Speaker) -> Result<(), StoreError> {
        match self.speakers.iter_mut().find(|s| s.id == updated.id) {
            Some(slot) => {
                *slot = updated;
                Ok(())
            }
            None => Err(StoreError::NotFound(updated.id)),
        }
    }
}

//! Store errors

use thiserror::Error;

/// Errors surfaced by the store. These never cross the store boundary as
/// panics; the actor turns them into `StoreUpdate` variants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The simulated fetch failed
    #[error("loading speaker data failed: {0}")]
    LoadFailed(String),

    /// A write targeted an id that is not in the collection
    #[error("no speaker with id {0}")]
    NotFound(u64),
}

//! Store layer - the roster collection behind simulated request latency
//!
//! The store actor receives update commands, delays them, and pushes
//! snapshots back to the App layer.

pub mod actor;
pub mod error;
pub mod state;

pub use actor::StoreActor;
pub use error::StoreError;
pub use state::{StoreSnapshot, StoreState};

//! Store messages - communication between App and Store layers

use crate::models::Speaker;
use crate::store::StoreSnapshot;

/// Commands sent from App layer to the store actor
#[derive(Debug, Clone)]
pub enum StoreCommand {
    /// Replace the record matching `speaker.id` after the simulated delay
    UpdateRecord(Speaker),

    /// Shutdown the store actor, cancelling all pending delayed writes
    Shutdown,
}

/// Updates pushed from the store actor back to the App layer
#[derive(Debug, Clone)]
pub enum StoreUpdate {
    /// Fresh snapshot: the initial seed publish or the load settling
    Snapshot(StoreSnapshot),

    /// A delayed write committed; the snapshot already reflects it
    Committed { id: u64, snapshot: StoreSnapshot },

    /// A write targeted an id that is not in the collection
    Rejected { id: u64, message: String },
}

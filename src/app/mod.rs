//! App layer - central state management and event processing
//!
//! The App actor receives UI events and store updates, updates state,
//! and emits store commands and render state.

pub mod actor;
pub mod state;

pub use actor::AppActor;
pub use state::AppState;

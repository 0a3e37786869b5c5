//! Message types for inter-layer communication in the actor-based architecture.
//!
//! This module defines all messages that flow between the UI, App, and Store layers.

pub mod render;
pub mod store;
pub mod ui_events;

pub use render::RenderState;
pub use store::{StoreCommand, StoreUpdate};
pub use ui_events::UiEvent;

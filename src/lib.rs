//! # Roster TUI
//!
//! A terminal-based conference speaker roster with favorites. The roster is
//! served by a store that simulates request latency: the view shows a
//! placeholder while the fake fetch is in flight, an error view if it fails,
//! and one row per speaker on success. Favorite toggles go through the same
//! simulated delay before they commit.
//!
//! ## Architecture
//! Actor-based with channels:
//! - UI Layer (Ratatui) - synchronous
//! - App Layer (State machine)
//! - Store Layer (Tokio timers)

pub mod app;
pub mod constants;
pub mod messages;
pub mod models;
pub mod seed;
pub mod store;
pub mod theme;
pub mod ui;

// Re-export commonly used types
pub use app::{AppActor, AppState};
pub use messages::{RenderState, StoreCommand, StoreUpdate, UiEvent};
pub use models::{RequestStatus, Speaker};
pub use store::{StoreActor, StoreError, StoreSnapshot};
pub use theme::{Theme, ThemeProvider};

//! Render state - data structure sent from App layer to UI for rendering

use std::collections::HashSet;

use crate::models::{RequestStatus, Speaker};
use crate::theme::Theme;

/// Complete state needed by the UI to render
#[derive(Debug, Clone, Default)]
pub struct RenderState {
    // Roster data mirrored from the latest store snapshot
    pub speakers: Vec<Speaker>,
    pub status: RequestStatus,
    pub error: Option<String>,

    // UI state
    pub theme: Theme,
    pub selected: usize,
    /// Ids with a favorite toggle still in flight
    pub pending: HashSet<u64>,
    /// Transient message shown in the status bar (e.g. a rejected write)
    pub status_line: Option<String>,
    pub show_help: bool,
}

impl RenderState {
    pub fn favorite_count(&self) -> usize {
        self.speakers.iter().filter(|s| s.favorite).count()
    }
}

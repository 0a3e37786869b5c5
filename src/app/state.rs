//! App state - pure data structure with no I/O logic

use std::collections::HashSet;

use crate::messages::{RenderState, StoreCommand, StoreUpdate};
use crate::models::{RequestStatus, Speaker};
use crate::store::StoreSnapshot;
use crate::theme::Theme;

/// Main application state - pure data, no I/O
pub struct AppState {
    // Roster data mirrored from the latest store snapshot
    pub speakers: Vec<Speaker>,
    pub status: RequestStatus,
    pub error: Option<String>,

    // UI state
    pub theme: Theme,
    pub selected: usize,
    pub pending_updates: HashSet<u64>,
    pub status_line: Option<String>,
    pub show_help: bool,
}

impl AppState {
    pub fn new(theme: Theme) -> Self {
        AppState {
            speakers: Vec::new(),
            status: RequestStatus::Loading,
            error: None,
            theme,
            selected: 0,
            pending_updates: HashSet::new(),
            status_line: None,
            show_help: false,
        }
    }

    /// Fold a store update into the state.
    pub fn handle_store_update(&mut self, update: StoreUpdate) {
        match update {
            StoreUpdate::Snapshot(snapshot) => self.apply_snapshot(snapshot),
            StoreUpdate::Committed { id, snapshot } => {
                self.pending_updates.remove(&id);
                self.apply_snapshot(snapshot);
            }
            StoreUpdate::Rejected { id, message } => {
                self.pending_updates.remove(&id);
                self.status_line = Some(message);
            }
        }
    }

    fn apply_snapshot(&mut self, snapshot: StoreSnapshot) {
        self.speakers = snapshot.speakers;
        self.status = snapshot.status;
        self.error = snapshot.error;
        self.clamp_selection();
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_next(&mut self) {
        self.selected += 1;
        self.clamp_selection();
    }

    fn clamp_selection(&mut self) {
        if !self.speakers.is_empty() {
            self.selected = self.selected.min(self.speakers.len() - 1);
        } else {
            self.selected = 0;
        }
    }

    /// Prepare a favorite toggle for the selected row. The full record with
    /// its id is captured here, so the write targets the right speaker no
    /// matter what the view does afterwards. Returns `None` while the load
    /// has not settled successfully.
    pub fn toggle_selected(&mut self) -> Option<StoreCommand> {
        if self.status != RequestStatus::Success {
            return None;
        }
        let speaker = self.speakers.get(self.selected)?;
        let flipped = speaker.toggled();
        self.pending_updates.insert(flipped.id);
        self.status_line = None;
        Some(StoreCommand::UpdateRecord(flipped))
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn close_help(&mut self) {
        self.show_help = false;
    }

    /// Convert state to RenderState for UI
    pub fn to_render_state(&self) -> RenderState {
        RenderState {
            speakers: self.speakers.clone(),
            status: self.status,
            error: self.error.clone(),
            theme: self.theme,
            selected: self.selected,
            pending: self.pending_updates.clone(),
            status_line: self.status_line.clone(),
            show_help: self.show_help,
        }
    }
}

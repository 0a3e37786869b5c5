//! Shared UI helpers - theme-aware styles and row formatting

use ratatui::prelude::*;

use crate::models::{RequestStatus, Speaker};
use crate::theme::Theme;

/// Base text style for the active theme
pub fn base_style(theme: Theme) -> Style {
    match theme {
        Theme::Light => Style::default().fg(Color::Black).bg(Color::White),
        Theme::Dark => Style::default().fg(Color::Gray).bg(Color::Black),
    }
}

/// Accent color used for titles and the selection highlight
pub fn accent_color(theme: Theme) -> Color {
    match theme {
        Theme::Light => Color::Blue,
        Theme::Dark => Color::Cyan,
    }
}

/// Color used for the request-status indicator
pub fn status_color(status: RequestStatus) -> Color {
    match status {
        RequestStatus::Loading => Color::Yellow,
        RequestStatus::Success => Color::Green,
        RequestStatus::Failure => Color::Red,
    }
}

/// Marker shown in front of each row
pub fn favorite_marker(favorite: bool) -> &'static str {
    if favorite {
        "[*]"
    } else {
        "[ ]"
    }
}

/// One roster row: marker, name, company, session count, pending indicator
pub fn speaker_line(speaker: &Speaker, pending: bool) -> String {
    let sessions = match speaker.sessions.len() {
        0 => String::new(),
        1 => String::from(" (1 session)"),
        n => format!(" ({n} sessions)"),
    };
    let busy = if pending { " ..." } else { "" };
    format!(
        "{} {} - {}{}{}",
        favorite_marker(speaker.favorite),
        speaker.full_name(),
        speaker.company,
        sessions,
        busy,
    )
}

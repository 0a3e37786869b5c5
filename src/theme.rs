//! Theme provider - a single process-wide owner of the current theme.
//!
//! The provider holds the value in a `tokio::sync::watch` channel: one
//! writer, any number of subscribers. Views never look the theme up from
//! ambient state; they read it out of the render state, and actors that
//! need change notifications subscribe explicitly.

use serde::{Deserialize, Serialize};
use tokio::sync::watch;

/// Visual theme applied to every view
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(&self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Parse a theme name, as used by the `ROSTER_THEME` variable.
    pub fn parse(name: &str) -> Option<Theme> {
        match name.to_ascii_lowercase().as_str() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }
}

/// Owns the current theme and notifies subscribers on change
pub struct ThemeProvider {
    tx: watch::Sender<Theme>,
}

impl ThemeProvider {
    pub fn new(initial: Theme) -> Self {
        let (tx, _rx) = watch::channel(initial);
        ThemeProvider { tx }
    }

    pub fn current(&self) -> Theme {
        *self.tx.borrow()
    }

    pub fn set(&self, theme: Theme) {
        self.tx.send_replace(theme);
    }

    /// Flip between light and dark, returning the new value.
    pub fn toggle(&self) -> Theme {
        let next = self.current().toggled();
        self.set(next);
        next
    }

    pub fn subscribe(&self) -> watch::Receiver<Theme> {
        self.tx.subscribe()
    }
}

impl Default for ThemeProvider {
    fn default() -> Self {
        Self::new(Theme::Light)
    }
}

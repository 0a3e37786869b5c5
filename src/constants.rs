//! Application constants
//!
//! Centralized location for magic numbers and configuration defaults.

/// Simulated request latency applied to the initial load and every update
pub const DEFAULT_DELAY_MS: u64 = 2000;

/// Number of skeleton rows shown while the roster is loading
pub const PLACEHOLDER_ROWS: usize = 15;

/// Environment variable overriding the simulated delay (milliseconds)
pub const DELAY_ENV_VAR: &str = "ROSTER_DELAY_MS";

/// Environment variable arming the simulated load failure
pub const FAIL_ENV_VAR: &str = "ROSTER_FAIL";

/// Environment variable selecting the starting theme (`light`/`dark`)
pub const THEME_ENV_VAR: &str = "ROSTER_THEME";

/// Application name
pub const APP_NAME: &str = "Roster TUI";

/// Application version
#[allow(dead_code)]
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

//! CLI-specific configuration for terminal UI.
use std::env;
use std::time::Duration;

/// CLI terminal UI configuration.
///
/// This contains settings specific to the terminal interface,
/// separate from cross-frontend client configuration.
#[derive(Clone, Debug, Default)]
pub struct CliConfig {
    pub ui: UiConfig,
    /// Names the log directory of this run. Generated from the clock when unset.
    pub session_id: Option<String>,
}

impl CliConfig {
    /// Construct CLI configuration from environment variables.
    ///
    /// Environment variables:
    /// - `CLI_TICK_MS` - Input polling interval in milliseconds (default: 16)
    /// - `CLI_COMPACT_WIDTH` - Below this many columns the compact layout is used (default: 64)
    /// - `CLI_SHOW_HINTS` - Show the key hint footer (default: true)
    /// - `CLI_SESSION_ID` - Session name for the log directory
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(ms) = parse::<u64>(&lookup, "CLI_TICK_MS") {
            config.ui.tick = Duration::from_millis(ms.max(1));
        }
        if let Some(width) = parse::<u16>(&lookup, "CLI_COMPACT_WIDTH") {
            config.ui.compact_width = width;
        }
        if let Some(show) = parse::<bool>(&lookup, "CLI_SHOW_HINTS") {
            config.ui.show_hints = show;
        }
        config.session_id = lookup("CLI_SESSION_ID").filter(|id| !id.trim().is_empty());

        config
    }
}

/// UI layout and display configuration.
#[derive(Clone, Debug)]
pub struct UiConfig {
    /// Interval between input polls.
    pub tick: Duration,
    /// Terminals narrower than this stack the panels vertically.
    pub compact_width: u16,
    pub show_hints: bool,
    /// Number of notices shown in the notice panel.
    pub notice_rows: usize,
}

impl UiConfig {
    pub fn is_compact(&self, width: u16) -> bool {
        width < self.compact_width
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick: Duration::from_millis(16),
            compact_width: 64,
            show_hints: true,
            notice_rows: 3,
        }
    }
}

fn parse<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    lookup(key)?.trim().parse().ok()
}

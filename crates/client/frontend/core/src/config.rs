//! Frontend configuration structures and loaders.
//!
//! This module contains UI-level configuration that is shared across
//! different frontend implementations (CLI, GUI, etc.).

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use select_core::{ConfirmPolicy, SelectionConfig};

/// Frontend-specific configuration.
#[derive(Clone, Debug, Default)]
pub struct FrontendConfig {
    pub selection: SelectionSettings,
    pub confirm: ConfirmConfig,
    pub notices: NoticeConfig,
    /// Roster file to load; `None` uses the built-in roster.
    pub roster_path: Option<PathBuf>,
}

impl FrontendConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `SELECT_GRID_COLUMNS` - Columns of the fighter grid (default: 3)
    /// - `SELECT_CONFIRM_POLICY` - `lock` or `permissive` (default: lock)
    /// - `SELECT_CONFIRM_DELAY_MS` - Delay before a confirmation lands (default: 600)
    /// - `SELECT_NOTICE_CAPACITY` - Notice log capacity (default: 32)
    /// - `SELECT_ROSTER_PATH` - `.ron` or `.toml` roster file (default: built-in)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`Self::from_env`] but reads values through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(columns) = parse::<usize>(&lookup, "SELECT_GRID_COLUMNS") {
            config.selection.columns = columns.max(1);
        }
        if let Some(policy) = parse::<ConfirmPolicy>(&lookup, "SELECT_CONFIRM_POLICY") {
            config.selection.policy = policy;
        }

        if let Some(delay) = parse::<u64>(&lookup, "SELECT_CONFIRM_DELAY_MS") {
            config.confirm.delay = Duration::from_millis(delay);
        }

        if let Some(capacity) = parse::<usize>(&lookup, "SELECT_NOTICE_CAPACITY") {
            config.notices.capacity = capacity.max(1);
        }

        config.roster_path = lookup("SELECT_ROSTER_PATH")
            .filter(|raw| !raw.trim().is_empty())
            .map(PathBuf::from);

        config
    }
}

/// Grid and locking behaviour of the selection machine.
#[derive(Clone, Copy, Debug)]
pub struct SelectionSettings {
    pub columns: usize,
    pub policy: ConfirmPolicy,
}

impl Default for SelectionSettings {
    fn default() -> Self {
        Self {
            columns: SelectionConfig::DEFAULT_COLUMNS,
            policy: ConfirmPolicy::Lock,
        }
    }
}

impl From<SelectionSettings> for SelectionConfig {
    fn from(settings: SelectionSettings) -> Self {
        SelectionConfig::new(settings.columns, settings.policy)
    }
}

#[derive(Clone, Copy, Debug)]
pub struct ConfirmConfig {
    /// Time the confirm button shows "confirming…" before the selection locks.
    pub delay: Duration,
}

impl Default for ConfirmConfig {
    fn default() -> Self {
        Self {
            delay: Duration::from_millis(600),
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct NoticeConfig {
    pub capacity: usize,
}

impl Default for NoticeConfig {
    fn default() -> Self {
        Self { capacity: 32 }
    }
}

fn parse<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    lookup(key)?.trim().parse().ok()
}

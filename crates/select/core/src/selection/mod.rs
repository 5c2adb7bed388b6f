//! Selection state and the machine that owns it.
//!
//! The state is three fields: the cursor (`highlighted`), the committed choice
//! (`selected`) and whether that choice is locked in (`confirmed`). Only
//! [`SelectionMachine`] can change them; frontends read [`SelectionState`]
//! snapshots and react to the [`Changes`] every operation returns.

mod machine;
mod observer;

pub use machine::SelectionMachine;
pub use observer::{ObserverId, SelectionObserver};

use bitflags::bitflags;

/// Snapshot of the selection fields.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SelectionState {
    /// Cursor position, moved by navigation.
    pub highlighted: usize,
    /// Last committed choice.
    pub selected: usize,
    /// True once the user has locked in `selected`.
    pub confirmed: bool,
}

impl SelectionState {
    pub const fn phase(&self) -> Phase {
        if self.confirmed {
            Phase::Confirmed
        } else {
            Phase::Browsing
        }
    }
}

/// Coarse state of the selection flow.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Phase {
    Browsing,
    Confirmed,
}

/// Whether a confirmed selection blocks cursor and selection changes.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ConfirmPolicy {
    /// `select`, `highlight`, `navigate` and `cycle` are rejected while
    /// confirmed; `cancel` unlocks them.
    #[default]
    Lock,
    /// Cursor and selection keep moving after confirmation.
    Permissive,
}

/// Construction parameters for [`SelectionMachine`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelectionConfig {
    /// Column count of the navigation grid.
    pub columns: usize,
    pub policy: ConfirmPolicy,
}

impl SelectionConfig {
    pub const DEFAULT_COLUMNS: usize = 3;

    pub const fn new(columns: usize, policy: ConfirmPolicy) -> Self {
        Self { columns, policy }
    }
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            columns: Self::DEFAULT_COLUMNS,
            policy: ConfirmPolicy::default(),
        }
    }
}

bitflags! {
    /// Fields of [`SelectionState`] modified by a single operation.
    ///
    /// An empty set means the operation was a no-op (rejected index, locked
    /// selection, or a value that was already current).
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct Changes: u8 {
        const HIGHLIGHTED = 1 << 0;
        const SELECTED    = 1 << 1;
        const CONFIRMED   = 1 << 2;
    }
}

impl Changes {
    /// True if anything a renderer shows has changed.
    pub const fn requires_redraw(self) -> bool {
        !self.is_empty()
    }
}

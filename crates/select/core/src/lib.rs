//! Roster model, grid navigation and selection state for the fighter select screen.
//!
//! `select-core` defines the canonical selection rules and exposes pure APIs
//! that every frontend reuses. All selection state mutation flows through
//! [`selection::SelectionMachine`]; cursor arithmetic lives in
//! [`grid::GridShape`], and the roster it indexes is [`roster::Roster`].
//!
//! The crate performs no I/O and emits no diagnostics. Rejected requests are
//! reported only through the (empty) [`Changes`] value an operation returns.
pub mod direction;
pub mod grid;
pub mod roster;
pub mod selection;

pub use direction::{Direction, Step};
pub use grid::{GridError, GridShape, resolve};
pub use roster::{
    ColorParseError, Fighter, FighterStats, Rgb, Roster, RosterError, STAT_MAX, StatKind,
};
pub use selection::{
    Changes, ConfirmPolicy, ObserverId, Phase, SelectionConfig, SelectionMachine,
    SelectionObserver, SelectionState,
};

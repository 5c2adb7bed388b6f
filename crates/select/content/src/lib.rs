//! Data-driven roster definitions and loaders.
//!
//! This crate houses the built-in fighter roster and provides loaders for
//! roster files:
//! - RON rosters (a list of fighters, the format of the built-in roster)
//! - TOML rosters (a `[[fighters]]` array of tables)
//!
//! Content is consumed by frontends and never appears in selection state.
//!
//! All loaders deserialize select-core types directly and validate them
//! through [`select_core::Roster::new`].

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{LoadResult, RosterFormat, RosterLoader};

/// The built-in roster as a RON document.
pub const BUILTIN_ROSTER_RON: &str = include_str!("../data/roster.ron");

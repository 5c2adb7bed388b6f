//! Widget modules for the select screen.
//!
//! Each widget is a `render` function drawing one panel from the
//! [`client_frontend_core::SelectScreen`] snapshot.

pub mod controls;
pub mod fighter_panel;
pub mod footer;
pub mod header;
pub mod notices;
pub mod roster_grid;

//! Terminal presentation layer (rendering, theme, widgets).

pub mod terminal;
pub mod theme;
pub mod ui;
pub mod widgets;

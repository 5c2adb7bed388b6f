//! Terminal UI frontend for the fighter select screen.
//!
//! Implements [`client_frontend_core::FrontendApp`] on top of ratatui and
//! crossterm.
//!
//! # Architecture
//!
//! `CliFrontend` owns the roster and the selection machine for one session:
//! - Key presses and mouse clicks become [`client_frontend_core::Intent`]s
//! - Intents are dispatched to the machine, whose change set drives redraws
//! - A pending confirmation lands after the configured delay

mod app;
mod config;
mod event;
mod input;
pub mod logging;
pub mod presentation;
mod state;

pub use app::CliFrontend;
pub use config::{CliConfig, UiConfig};

// Re-export for convenience (used in main.rs)
pub use client_frontend_core::FrontendConfig;

//! Event handling for the CLI client.
//!
//! The event loop polls terminal input, dispatches intents to the selection
//! machine and lands pending confirmations.

mod handlers;
mod r#loop;

pub use r#loop::EventLoop;

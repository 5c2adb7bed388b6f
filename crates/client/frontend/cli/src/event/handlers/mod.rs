//! Event handler implementations for EventLoop.
//!
//! Handler methods are organized by responsibility:
//! - `input`: Keyboard and mouse input, intent dispatch
//! - `rendering`: Terminal rendering
//!
//! All handlers are implemented as `impl EventLoop` blocks in separate files.

mod input;
mod rendering;

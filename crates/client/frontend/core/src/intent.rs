//! Semantic intents produced by frontends from raw input.
//!
//! Frontends translate key presses, clicks and gestures into an [`Intent`]
//! and hand it to [`dispatch`]; they never touch selection fields directly.

use select_core::{Changes, Direction, SelectionMachine, Step};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Intent {
    /// Arrow-key style move over the grid.
    Navigate(Direction),
    /// Swipe-style move along roster order.
    Cycle(Step),
    /// Commit the fighter under the cursor (Enter / Space).
    Activate,
    /// Commit a specific fighter (click / tap).
    Pick(usize),
    /// Commit the previous or next fighter (viewer arrows).
    Browse(Step),
    /// Lock in the current selection.
    Confirm,
    /// Release a locked selection.
    Cancel,
}

/// Applies `intent` to `machine` and returns the fields it changed.
pub fn dispatch(machine: &mut SelectionMachine, intent: Intent) -> Changes {
    match intent {
        Intent::Navigate(direction) => machine.navigate(direction),
        Intent::Cycle(step) => machine.cycle(step),
        Intent::Activate => machine.select(machine.state().highlighted),
        Intent::Pick(index) => machine.select(index),
        Intent::Browse(step) => machine.select_adjacent(step),
        Intent::Confirm => machine.confirm(),
        Intent::Cancel => machine.cancel(),
    }
}

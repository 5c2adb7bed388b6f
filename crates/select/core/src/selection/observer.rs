//! Change notification for selection state.

use super::{Changes, SelectionState};

/// Receives a snapshot after every operation that changed the selection.
///
/// Observers run synchronously inside the mutating call, in subscription
/// order. `Send` closures of the form `FnMut(&SelectionState, Changes)`
/// implement this trait.
pub trait SelectionObserver: Send {
    fn on_change(&mut self, state: &SelectionState, changes: Changes);
}

impl<F> SelectionObserver for F
where
    F: FnMut(&SelectionState, Changes) + Send,
{
    fn on_change(&mut self, state: &SelectionState, changes: Changes) {
        self(state, changes)
    }
}

/// Handle returned by [`super::SelectionMachine::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObserverId(pub(super) u64);

use core::fmt;

use super::{
    Changes, ConfirmPolicy, ObserverId, Phase, SelectionConfig, SelectionObserver, SelectionState,
};
use crate::direction::{Direction, Step};
use crate::grid::{GridError, GridShape};
use crate::roster::Roster;

/// Owner of the selection state and its only mutation surface.
///
/// Every operation is total: indices outside the roster and requests blocked
/// by [`ConfirmPolicy::Lock`] are ignored and reported as an empty
/// [`Changes`] set. Nothing is logged and nothing panics.
///
/// ```text
/// Browsing ──confirm()──► Confirmed
///    ▲                        │
///    └────────cancel()────────┘
/// ```
pub struct SelectionMachine {
    state: SelectionState,
    grid: GridShape,
    policy: ConfirmPolicy,
    observers: Vec<(ObserverId, Box<dyn SelectionObserver>)>,
    next_observer: u64,
}

impl SelectionMachine {
    /// Creates a machine over `len` items, with the cursor and selection on
    /// the first item.
    pub fn new(len: usize, config: SelectionConfig) -> Result<Self, GridError> {
        let grid = GridShape::new(len, config.columns)?;
        Ok(Self {
            state: SelectionState::default(),
            grid,
            policy: config.policy,
            observers: Vec::new(),
            next_observer: 0,
        })
    }

    /// Creates a machine sized to `roster`.
    pub fn for_roster(roster: &Roster, config: SelectionConfig) -> Result<Self, GridError> {
        Self::new(roster.len(), config)
    }

    pub fn state(&self) -> SelectionState {
        self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    pub fn grid(&self) -> GridShape {
        self.grid
    }

    pub fn policy(&self) -> ConfirmPolicy {
        self.policy
    }

    /// Commits `index` as the selection and moves the cursor onto it.
    pub fn select(&mut self, index: usize) -> Changes {
        if !self.grid.contains(index) || self.is_locked() {
            return Changes::empty();
        }

        let mut changes = self.set_highlighted(index);
        if self.state.selected != index {
            self.state.selected = index;
            changes |= Changes::SELECTED;
        }
        self.publish(changes)
    }

    /// Moves the cursor to `index` without committing it.
    pub fn highlight(&mut self, index: usize) -> Changes {
        if !self.grid.contains(index) || self.is_locked() {
            return Changes::empty();
        }

        let changes = self.set_highlighted(index);
        self.publish(changes)
    }

    /// Moves the cursor one cell over the grid.
    pub fn navigate(&mut self, direction: Direction) -> Changes {
        if self.is_locked() {
            return Changes::empty();
        }

        let next = self.grid.resolve(self.state.highlighted, direction);
        let changes = self.set_highlighted(next);
        self.publish(changes)
    }

    /// Moves the cursor one item along roster order, ignoring the grid.
    pub fn cycle(&mut self, step: Step) -> Changes {
        if self.is_locked() {
            return Changes::empty();
        }

        let next = self.grid.cycle(self.state.highlighted, step);
        let changes = self.set_highlighted(next);
        self.publish(changes)
    }

    /// Selects the item before or after the current selection.
    pub fn select_adjacent(&mut self, step: Step) -> Changes {
        let next = self.grid.cycle(self.state.selected, step);
        self.select(next)
    }

    /// Locks in the current selection. Confirming twice is a no-op.
    pub fn confirm(&mut self) -> Changes {
        if self.state.confirmed {
            return Changes::empty();
        }

        self.state.confirmed = true;
        self.publish(Changes::CONFIRMED)
    }

    /// Releases a confirmed selection so browsing can resume.
    pub fn cancel(&mut self) -> Changes {
        if !self.state.confirmed {
            return Changes::empty();
        }

        self.state.confirmed = false;
        self.publish(Changes::CONFIRMED)
    }

    /// Registers an observer called after every state change.
    pub fn subscribe(&mut self, observer: impl SelectionObserver + 'static) -> ObserverId {
        let id = ObserverId(self.next_observer);
        self.next_observer += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Removes an observer. Returns false if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(existing, _)| *existing != id);
        self.observers.len() != before
    }

    fn is_locked(&self) -> bool {
        self.state.confirmed && self.policy == ConfirmPolicy::Lock
    }

    fn set_highlighted(&mut self, index: usize) -> Changes {
        if self.state.highlighted == index {
            return Changes::empty();
        }
        self.state.highlighted = index;
        Changes::HIGHLIGHTED
    }

    fn publish(&mut self, changes: Changes) -> Changes {
        if !changes.is_empty() {
            let snapshot = self.state;
            for (_, observer) in &mut self.observers {
                observer.on_change(&snapshot, changes);
            }
        }
        changes
    }
}

impl fmt::Debug for SelectionMachine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectionMachine")
            .field("state", &self.state)
            .field("grid", &self.grid)
            .field("policy", &self.policy)
            .field("observers", &self.observers.len())
            .finish()
    }
}

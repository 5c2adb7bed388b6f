//! Utilities for reacting to selection changes inside UI layers.
use select_core::{Changes, Roster, SelectionState};

use crate::notice::{Notice, NoticeLevel, NoticeLog};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EventImpact {
    pub requires_redraw: bool,
}

impl EventImpact {
    pub const fn none() -> Self {
        Self {
            requires_redraw: false,
        }
    }

    pub const fn redraw() -> Self {
        Self {
            requires_redraw: true,
        }
    }

    pub fn combine(self, other: Self) -> Self {
        Self {
            requires_redraw: self.requires_redraw || other.requires_redraw,
        }
    }
}

/// Consumes the result of every dispatched intent.
///
/// Frontends call [`SelectionConsumer::on_change`] after each dispatch with
/// the fresh snapshot, which is how notifications such as the confirmation
/// notice are produced outside the selection core.
pub trait SelectionConsumer {
    fn on_change(
        &mut self,
        roster: &Roster,
        state: &SelectionState,
        changes: Changes,
    ) -> EventImpact;
    fn notices(&self) -> &NoticeLog;
    fn notices_mut(&mut self) -> &mut NoticeLog;
}

/// Default consumer: turns confirmation transitions into notices.
#[derive(Clone, Debug)]
pub struct NoticeConsumer {
    notices: NoticeLog,
}

impl NoticeConsumer {
    pub fn new(notices: NoticeLog) -> Self {
        Self { notices }
    }

    pub fn into_notices(self) -> NoticeLog {
        self.notices
    }
}

impl SelectionConsumer for NoticeConsumer {
    fn on_change(
        &mut self,
        roster: &Roster,
        state: &SelectionState,
        changes: Changes,
    ) -> EventImpact {
        if changes.is_empty() {
            return EventImpact::none();
        }

        if changes.contains(Changes::CONFIRMED) {
            if state.confirmed {
                if let Some(fighter) = roster.get(state.selected) {
                    self.notices.push(Notice::new(
                        "Fighter selected!",
                        format!("{} is ready for battle.", fighter.name),
                        NoticeLevel::Success,
                    ));
                }
            } else {
                self.notices.push(Notice::new(
                    "Selection cancelled",
                    "Pick your fighter again.",
                    NoticeLevel::Warning,
                ));
            }
        }

        EventImpact::redraw()
    }

    fn notices(&self) -> &NoticeLog {
        &self.notices
    }

    fn notices_mut(&mut self) -> &mut NoticeLog {
        &mut self.notices
    }
}

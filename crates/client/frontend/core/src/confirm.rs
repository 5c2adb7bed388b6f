//! Delayed confirmation shown as "confirming…" on the confirm button.
//!
//! The delay is purely a presentation affordance. The selection machine's
//! `confirm()` is only called once [`PendingConfirm::take_due`] fires.

use std::time::{Duration, Instant};

#[derive(Clone, Copy, Debug)]
pub struct PendingConfirm {
    delay: Duration,
    started: Option<Instant>,
}

impl PendingConfirm {
    pub const fn new(delay: Duration) -> Self {
        Self {
            delay,
            started: None,
        }
    }

    /// Starts the countdown. Returns false if one is already running or the
    /// selection is already confirmed.
    pub fn begin(&mut self, now: Instant, already_confirmed: bool) -> bool {
        if already_confirmed || self.started.is_some() {
            return false;
        }
        self.started = Some(now);
        true
    }

    pub const fn is_pending(&self) -> bool {
        self.started.is_some()
    }

    /// Instant at which the pending confirmation lands.
    pub fn deadline(&self) -> Option<Instant> {
        self.started.map(|started| started + self.delay)
    }

    /// Clears the countdown and returns true once the deadline has passed.
    pub fn take_due(&mut self, now: Instant) -> bool {
        match self.deadline() {
            Some(deadline) if now >= deadline => {
                self.started = None;
                true
            }
            _ => false,
        }
    }

    /// Drops a running countdown. Returns true if one was running.
    pub fn abort(&mut self) -> bool {
        self.started.take().is_some()
    }
}

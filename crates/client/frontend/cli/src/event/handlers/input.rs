//! Input handling (keyboard, mouse and the confirm countdown).

use std::time::Instant;

use anyhow::Result;
use client_frontend_core::{Intent, Notice, SelectionConsumer, dispatch};
use crossterm::event::{
    self as term_event, Event as TermEvent, KeyEvent, KeyEventKind, MouseButton, MouseEvent,
    MouseEventKind,
};
use select_core::Step;
use tokio::time::Duration;

use crate::event::r#loop::{EventLoop, Flow};
use crate::{input::KeyAction, presentation::terminal::Tui};

impl<C> EventLoop<C>
where
    C: SelectionConsumer,
{
    /// Drain pending terminal events. Returns true when the player quits.
    pub(in crate::event) fn handle_input_tick(&mut self, terminal: &mut Tui) -> Result<bool> {
        let mut redraw = false;

        while term_event::poll(Duration::ZERO)? {
            let now = Instant::now();
            let flow = match term_event::read()? {
                TermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                    self.handle_key_press(key, now)
                }
                TermEvent::Mouse(mouse) => self.handle_mouse(mouse, now),
                TermEvent::Resize(_, _) => Flow::Redraw,
                _ => Flow::Continue,
            };

            match flow {
                Flow::Quit => return Ok(true),
                Flow::Redraw => redraw = true,
                Flow::Continue => {}
            }
        }

        if redraw {
            self.render(terminal)?;
        }
        Ok(false)
    }

    pub(in crate::event) fn handle_key_press(&mut self, key: KeyEvent, now: Instant) -> Flow {
        match self.input.handle_key(key) {
            KeyAction::Quit => {
                tracing::info!("Quit requested");
                Flow::Quit
            }
            KeyAction::Dispatch(intent) => self.apply(intent),
            KeyAction::BeginConfirm => self.begin_confirm(now),
            KeyAction::Back => self.back(),
            KeyAction::ToggleGrid => {
                self.app_state.toggle_grid();
                Flow::Redraw
            }
            KeyAction::None => Flow::Continue,
        }
    }

    /// Left click picks a card, presses the confirm button or a viewer
    /// chevron; the wheel cycles the cursor like a swipe.
    pub(in crate::event) fn handle_mouse(&mut self, mouse: MouseEvent, now: Instant) -> Flow {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let hits = &self.app_state.hit_map;
                if hits.hits_confirm(mouse.column, mouse.row) {
                    self.begin_confirm(now)
                } else if let Some(index) = hits.card_at(mouse.column, mouse.row) {
                    self.apply(Intent::Pick(index))
                } else if let Some(step) = hits.browse_at(mouse.column, mouse.row) {
                    self.apply(Intent::Browse(step))
                } else {
                    Flow::Continue
                }
            }
            MouseEventKind::ScrollDown => self.apply(Intent::Cycle(Step::Next)),
            MouseEventKind::ScrollUp => self.apply(Intent::Cycle(Step::Previous)),
            _ => Flow::Continue,
        }
    }

    /// Confirms the selection once the countdown has elapsed.
    pub(in crate::event) fn land_pending_confirm(&mut self, now: Instant) -> Flow {
        if !self.app_state.pending_confirm.take_due(now) {
            return Flow::Continue;
        }
        self.apply(Intent::Confirm);
        // The button leaves its pending look even if nothing changed.
        Flow::Redraw
    }

    fn apply(&mut self, intent: Intent) -> Flow {
        let changes = dispatch(&mut self.machine, intent);
        if changes.is_empty() {
            tracing::trace!("Ignored {:?}", intent);
            return Flow::Continue;
        }

        let impact = self
            .consumer
            .on_change(&self.roster, &self.machine.state(), changes);
        if impact.requires_redraw {
            Flow::Redraw
        } else {
            Flow::Continue
        }
    }

    fn begin_confirm(&mut self, now: Instant) -> Flow {
        let confirmed = self.machine.state().confirmed;
        if self.app_state.pending_confirm.begin(now, confirmed) {
            tracing::debug!("Confirmation pending");
            Flow::Redraw
        } else {
            Flow::Continue
        }
    }

    fn back(&mut self) -> Flow {
        if self.app_state.pending_confirm.abort() {
            self.consumer
                .notices_mut()
                .push(Notice::info("Confirmation aborted", ""));
            return Flow::Redraw;
        }
        self.apply(Intent::Cancel)
    }
}

//! Event loop orchestrating user input, delayed confirmation and rendering.

use std::time::Instant;

use anyhow::Result;
use select_core::{Roster, SelectionMachine};
use tokio::time::{self, Duration, MissedTickBehavior};

use crate::{config::CliConfig, input::InputHandler, presentation::terminal::Tui, state::AppState};
use client_frontend_core::SelectionConsumer;

/// What the loop should do after handling one input event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Flow {
    Continue,
    Redraw,
    Quit,
}

/// Event loop owning the roster, the selection machine and the terminal state.
pub struct EventLoop<C>
where
    C: SelectionConsumer,
{
    pub(crate) roster: Roster,
    pub(crate) machine: SelectionMachine,
    pub(crate) input: InputHandler,
    pub(crate) consumer: C,
    pub(crate) app_state: AppState,
    pub(crate) cli_config: CliConfig,
}

impl<C> EventLoop<C>
where
    C: SelectionConsumer,
{
    pub fn new(
        roster: Roster,
        machine: SelectionMachine,
        consumer: C,
        confirm_delay: Duration,
        cli_config: CliConfig,
    ) -> Self {
        Self {
            roster,
            machine,
            input: InputHandler::new(),
            consumer,
            app_state: AppState::new(confirm_delay),
            cli_config,
        }
    }

    /// Runs until the player quits and hands back the consumer.
    pub async fn run(mut self, terminal: &mut Tui) -> Result<C> {
        self.render(terminal)?;

        let mut input_tick = time::interval(self.cli_config.ui.tick);
        input_tick.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            let deadline = self.app_state.pending_confirm.deadline();
            // Disabled branches still build their future, so it needs some instant.
            let confirm_at = time::Instant::from_std(deadline.unwrap_or_else(Instant::now));

            tokio::select! {
                _ = input_tick.tick() => {
                    if self.handle_input_tick(terminal)? {
                        break;
                    }
                }
                _ = time::sleep_until(confirm_at), if deadline.is_some() => {
                    if self.land_pending_confirm(Instant::now()) == Flow::Redraw {
                        self.render(terminal)?;
                    }
                }
            }
        }

        tracing::info!("Event loop finished: {:?}", self.machine.state());
        Ok(self.consumer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use client_frontend_core::{NoticeConsumer, NoticeLevel, NoticeLog};
    use crossterm::event::{
        KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers, MouseButton, MouseEvent,
        MouseEventKind,
    };
    use ratatui::layout::Rect;
    use select_core::{ConfirmPolicy, SelectionConfig};

    use crate::presentation::widgets::fighter_panel::BrowseButtons;

    const DELAY: Duration = Duration::from_millis(600);

    fn event_loop(policy: ConfirmPolicy) -> EventLoop<NoticeConsumer> {
        let roster = select_content::RosterLoader::builtin().unwrap();
        let machine =
            SelectionMachine::for_roster(&roster, SelectionConfig::new(3, policy)).unwrap();
        EventLoop::new(
            roster,
            machine,
            NoticeConsumer::new(NoticeLog::new(8)),
            DELAY,
            CliConfig::default(),
        )
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::empty(),
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::empty(),
        }
    }

    #[test]
    fn arrows_move_cursor_and_enter_commits() {
        let mut lp = event_loop(ConfirmPolicy::Lock);
        let now = Instant::now();

        assert_eq!(lp.handle_key_press(key(KeyCode::Down), now), Flow::Redraw);
        assert_eq!(lp.handle_key_press(key(KeyCode::Right), now), Flow::Redraw);
        assert_eq!(lp.machine.state().highlighted, 4);
        assert_eq!(lp.machine.state().selected, 0);

        assert_eq!(lp.handle_key_press(key(KeyCode::Enter), now), Flow::Redraw);
        assert_eq!(lp.machine.state().selected, 4);

        // Committing the same fighter again changes nothing.
        assert_eq!(lp.handle_key_press(key(KeyCode::Enter), now), Flow::Continue);
    }

    #[test]
    fn confirmation_lands_after_delay() {
        let mut lp = event_loop(ConfirmPolicy::Lock);
        let start = Instant::now();

        assert_eq!(lp.handle_key_press(key(KeyCode::Char('c')), start), Flow::Redraw);
        assert!(lp.app_state.pending_confirm.is_pending());
        assert_eq!(lp.handle_key_press(key(KeyCode::Char('c')), start), Flow::Continue);

        assert_eq!(lp.land_pending_confirm(start + DELAY / 2), Flow::Continue);
        assert!(!lp.machine.state().confirmed);

        assert_eq!(lp.land_pending_confirm(start + DELAY), Flow::Redraw);
        assert!(lp.machine.state().confirmed);
        assert_eq!(
            lp.consumer.notices().latest().map(|n| n.level),
            Some(NoticeLevel::Success)
        );

        // Locked: the cursor no longer moves.
        assert_eq!(lp.handle_key_press(key(KeyCode::Right), start), Flow::Continue);
    }

    #[test]
    fn escape_aborts_pending_before_cancelling() {
        let mut lp = event_loop(ConfirmPolicy::Lock);
        let start = Instant::now();

        lp.handle_key_press(key(KeyCode::Char('c')), start);
        assert_eq!(lp.handle_key_press(key(KeyCode::Esc), start), Flow::Redraw);
        assert!(!lp.app_state.pending_confirm.is_pending());
        assert_eq!(lp.land_pending_confirm(start + DELAY), Flow::Continue);
        assert!(!lp.machine.state().confirmed);

        lp.handle_key_press(key(KeyCode::Char('c')), start);
        lp.land_pending_confirm(start + DELAY);
        assert!(lp.machine.state().confirmed);

        assert_eq!(lp.handle_key_press(key(KeyCode::Esc), start), Flow::Redraw);
        assert!(!lp.machine.state().confirmed);
        assert_eq!(
            lp.consumer.notices().latest().map(|n| n.level),
            Some(NoticeLevel::Warning)
        );
    }

    #[test]
    fn clicks_pick_cards_and_press_confirm() {
        let mut lp = event_loop(ConfirmPolicy::Lock);
        let now = Instant::now();
        lp.app_state.hit_map.cards = vec![
            (0, Rect::new(0, 0, 10, 3)),
            (5, Rect::new(10, 3, 10, 3)),
        ];
        lp.app_state.hit_map.confirm_button = Some(Rect::new(0, 10, 20, 3));

        assert_eq!(lp.handle_mouse(click(12, 4), now), Flow::Redraw);
        assert_eq!(lp.machine.state().selected, 5);
        assert_eq!(lp.machine.state().highlighted, 5);

        assert_eq!(lp.handle_mouse(click(40, 40), now), Flow::Continue);

        assert_eq!(lp.handle_mouse(click(5, 11), now), Flow::Redraw);
        assert!(lp.app_state.pending_confirm.is_pending());
    }

    #[test]
    fn chevron_clicks_commit_neighbours() {
        let mut lp = event_loop(ConfirmPolicy::Lock);
        let now = Instant::now();
        lp.app_state.hit_map.browse = Some(BrowseButtons {
            previous: Rect::new(2, 20, 3, 1),
            next: Rect::new(30, 20, 3, 1),
        });

        assert_eq!(lp.handle_mouse(click(3, 20), now), Flow::Redraw);
        assert_eq!(lp.machine.state().selected, lp.roster.len() - 1);

        assert_eq!(lp.handle_mouse(click(31, 20), now), Flow::Redraw);
        assert_eq!(lp.machine.state().selected, 0);

        lp.machine.confirm();
        assert_eq!(lp.handle_mouse(click(31, 20), now), Flow::Continue);
        assert_eq!(lp.machine.state().selected, 0);
    }

    #[test]
    fn scrolling_cycles_cursor() {
        let mut lp = event_loop(ConfirmPolicy::Lock);
        let scroll = MouseEvent {
            kind: MouseEventKind::ScrollUp,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::empty(),
        };

        assert_eq!(lp.handle_mouse(scroll, Instant::now()), Flow::Redraw);
        assert_eq!(lp.machine.state().highlighted, lp.roster.len() - 1);
        assert_eq!(lp.machine.state().selected, 0);
    }

    #[test]
    fn grid_toggle_and_quit() {
        let mut lp = event_loop(ConfirmPolicy::Permissive);
        let now = Instant::now();

        assert_eq!(lp.handle_key_press(key(KeyCode::Char('g')), now), Flow::Redraw);
        assert!(!lp.app_state.grid_visible);
        assert_eq!(lp.handle_key_press(key(KeyCode::Char('q')), now), Flow::Quit);
    }
}

//! Input processing for the CLI client.
//!
//! This module owns the keyboard-to-intent mapping so the rest of the
//! application can remain agnostic about concrete key bindings or the
//! specifics of `crossterm` events.

use client_frontend_core::Intent;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use select_core::{Direction, Step};

/// High-level outcome of processing a keyboard event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// Exit the application.
    Quit,
    /// Apply the intent to the selection machine.
    Dispatch(Intent),
    /// Start the delayed confirmation.
    BeginConfirm,
    /// Abort a pending confirmation, or cancel a locked one.
    Back,
    /// Show or hide the roster grid.
    ToggleGrid,
    /// No meaningful command was produced.
    None,
}

/// Translates `KeyEvent`s into select-screen commands.
#[derive(Clone, Copy, Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    /// Converts a raw key event into a higher-level command.
    pub fn handle_key(&self, key: KeyEvent) -> KeyAction {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') | KeyCode::Char('C') => KeyAction::Quit,
                _ => KeyAction::None,
            };
        }

        match key.code {
            KeyCode::Char(ch) => self.handle_char(ch),
            KeyCode::Left => navigate(Direction::Left),
            KeyCode::Right => navigate(Direction::Right),
            KeyCode::Up => navigate(Direction::Up),
            KeyCode::Down => navigate(Direction::Down),
            KeyCode::Enter => KeyAction::Dispatch(Intent::Activate),
            KeyCode::Tab => KeyAction::Dispatch(Intent::Cycle(Step::Next)),
            KeyCode::BackTab => KeyAction::Dispatch(Intent::Cycle(Step::Previous)),
            KeyCode::Esc | KeyCode::Backspace => KeyAction::Back,
            _ => KeyAction::None,
        }
    }

    fn handle_char(&self, raw: char) -> KeyAction {
        if let Some(digit) = raw.to_digit(10).filter(|digit| *digit > 0) {
            return KeyAction::Dispatch(Intent::Pick(digit as usize - 1));
        }

        match raw.to_ascii_lowercase() {
            'q' => KeyAction::Quit,
            'h' | 'a' => navigate(Direction::Left),
            'j' | 's' => navigate(Direction::Down),
            'k' | 'w' => navigate(Direction::Up),
            'l' | 'd' => navigate(Direction::Right),
            ' ' => KeyAction::Dispatch(Intent::Activate),
            '[' => KeyAction::Dispatch(Intent::Browse(Step::Previous)),
            ']' => KeyAction::Dispatch(Intent::Browse(Step::Next)),
            'c' => KeyAction::BeginConfirm,
            'g' => KeyAction::ToggleGrid,
            _ => KeyAction::None,
        }
    }
}

fn navigate(direction: Direction) -> KeyAction {
    KeyAction::Dispatch(Intent::Navigate(direction))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::empty(),
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn maps_movement_keys() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('h'))),
            navigate(Direction::Left)
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('W'))),
            navigate(Direction::Up)
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Down)),
            navigate(Direction::Down)
        );
    }

    #[test]
    fn maps_selection_keys() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key(KeyCode::Enter)),
            KeyAction::Dispatch(Intent::Activate)
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('3'))),
            KeyAction::Dispatch(Intent::Pick(2))
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Char(']'))),
            KeyAction::Dispatch(Intent::Browse(Step::Next))
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::BackTab)),
            KeyAction::Dispatch(Intent::Cycle(Step::Previous))
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('c'))),
            KeyAction::BeginConfirm
        );
        assert_eq!(handler.handle_key(key(KeyCode::Esc)), KeyAction::Back);
    }

    #[test]
    fn maps_quit_keys() {
        let handler = InputHandler::new();
        assert_eq!(handler.handle_key(key(KeyCode::Char('q'))), KeyAction::Quit);

        let ctrl_c = KeyEvent {
            modifiers: KeyModifiers::CONTROL,
            ..key(KeyCode::Char('c'))
        };
        assert_eq!(handler.handle_key(ctrl_c), KeyAction::Quit);
    }

    #[test]
    fn ignores_unknown_keys() {
        let handler = InputHandler::new();
        assert_eq!(handler.handle_key(key(KeyCode::Char('x'))), KeyAction::None);
        assert_eq!(handler.handle_key(key(KeyCode::Char('0'))), KeyAction::None);
        assert_eq!(handler.handle_key(key(KeyCode::F(1))), KeyAction::None);
    }
}

//! Terminal-only state that lives next to the selection machine.
use std::time::Duration;

use client_frontend_core::PendingConfirm;

use crate::presentation::ui::HitMap;

#[derive(Clone, Debug)]
pub struct AppState {
    /// The roster grid can be folded away to give the viewer the full screen.
    pub grid_visible: bool,
    pub pending_confirm: PendingConfirm,
    /// Clickable regions from the latest frame.
    pub hit_map: HitMap,
}

impl AppState {
    pub fn new(confirm_delay: Duration) -> Self {
        Self {
            grid_visible: true,
            pending_confirm: PendingConfirm::new(confirm_delay),
            hit_map: HitMap::default(),
        }
    }

    pub fn toggle_grid(&mut self) {
        self.grid_visible = !self.grid_visible;
        if !self.grid_visible {
            self.hit_map.cards.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hiding_grid_drops_card_hits() {
        let mut state = AppState::new(Duration::from_millis(600));
        state
            .hit_map
            .cards
            .push((0, ratatui::layout::Rect::new(0, 0, 4, 4)));

        state.toggle_grid();
        assert!(!state.grid_visible);
        assert!(state.hit_map.cards.is_empty());

        state.toggle_grid();
        assert!(state.grid_visible);
    }
}

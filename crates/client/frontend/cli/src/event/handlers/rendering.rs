//! Rendering handlers.

use anyhow::Result;
use client_frontend_core::{SelectScreen, SelectionConsumer};

use crate::event::r#loop::EventLoop;
use crate::presentation::{terminal::Tui, ui};

impl<C> EventLoop<C>
where
    C: SelectionConsumer,
{
    /// Render the current snapshot and remember its clickable regions.
    pub(in crate::event) fn render(&mut self, terminal: &mut Tui) -> Result<()> {
        let screen = self.screen();
        let ctx = ui::RenderContext {
            screen: &screen,
            grid_visible: self.app_state.grid_visible,
            ui: &self.cli_config.ui,
        };

        self.app_state.hit_map = ui::render(terminal, &ctx)?;
        Ok(())
    }

    pub(in crate::event) fn screen(&self) -> SelectScreen {
        SelectScreen::from_machine(
            &self.roster,
            &self.machine,
            self.app_state.pending_confirm.is_pending(),
            self.consumer.notices(),
            self.cli_config.ui.notice_rows,
        )
    }
}

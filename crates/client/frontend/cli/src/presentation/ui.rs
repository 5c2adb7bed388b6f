//! Screen composition for the select screen.
//!
//! [`render`] draws one frame from a [`SelectScreen`] snapshot and returns
//! the clickable regions it laid out, so mouse input can be resolved against
//! exactly what the player sees.
use anyhow::Result;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
};

use crate::config::UiConfig;
use crate::presentation::widgets::fighter_panel::BrowseButtons;
use crate::presentation::{terminal::Tui, theme::RatatuiTheme, widgets};
use client_frontend_core::SelectScreen;
use select_core::Step;

/// Height of one card row, borders included.
pub const CARD_HEIGHT: u16 = 3;

/// Rendering context containing all state and configuration needed for UI rendering.
pub struct RenderContext<'a> {
    pub screen: &'a SelectScreen,
    pub grid_visible: bool,
    pub ui: &'a UiConfig,
}

/// Clickable regions of the last drawn frame.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HitMap {
    /// Roster index and area of each visible card.
    pub cards: Vec<(usize, Rect)>,
    pub confirm_button: Option<Rect>,
    /// Viewer chevrons that commit the previous or next fighter.
    pub browse: Option<BrowseButtons>,
}

impl HitMap {
    pub fn card_at(&self, column: u16, row: u16) -> Option<usize> {
        self.cards
            .iter()
            .find(|(_, area)| contains(*area, column, row))
            .map(|(index, _)| *index)
    }

    pub fn hits_confirm(&self, column: u16, row: u16) -> bool {
        self.confirm_button
            .is_some_and(|area| contains(area, column, row))
    }

    pub fn browse_at(&self, column: u16, row: u16) -> Option<Step> {
        let buttons = self.browse?;
        if contains(buttons.previous, column, row) {
            Some(Step::Previous)
        } else if contains(buttons.next, column, row) {
            Some(Step::Next)
        } else {
            None
        }
    }
}

fn contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x && column < area.right() && row >= area.y && row < area.bottom()
}

/// Draw the screen into `terminal`.
pub fn render(terminal: &mut Tui, ctx: &RenderContext) -> Result<HitMap> {
    let mut hits = HitMap::default();
    terminal.draw(|frame| hits = draw(frame, ctx))?;
    Ok(hits)
}

/// Lay out and draw every panel into `frame`.
///
/// Wide terminals put the fighter viewer and the roster side by side; narrow
/// ones stack them and drop the key hints.
pub fn draw(frame: &mut Frame, ctx: &RenderContext) -> HitMap {
    let theme = RatatuiTheme;
    let area = frame.area();
    let compact = ctx.ui.is_compact(area.width);
    let mut hits = HitMap::default();

    // Compact mode gives the grid at most half the screen; it scrolls beyond that.
    let grid_height = u16::try_from(ctx.screen.rows)
        .unwrap_or(u16::MAX)
        .saturating_mul(CARD_HEIGHT)
        .saturating_add(2)
        .min(area.height / 2);
    let notice_height = u16::try_from(ctx.ui.notice_rows)
        .unwrap_or(u16::MAX)
        .saturating_add(2);
    let show_footer = ctx.ui.show_hints && !compact;

    let mut constraints = vec![Constraint::Length(3)]; // Header
    constraints.push(Constraint::Min(6)); // Viewer (and roster when wide)
    if compact && ctx.grid_visible {
        constraints.push(Constraint::Length(grid_height));
    }
    constraints.push(Constraint::Length(3)); // Confirm button + status
    constraints.push(Constraint::Length(notice_height));
    if show_footer {
        constraints.push(Constraint::Length(1));
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);
    let mut next = chunks.iter().copied();
    let mut take = || next.next().unwrap_or_default();

    widgets::header::render(frame, take(), ctx.screen, &theme);

    let body = take();
    if compact {
        hits.browse = widgets::fighter_panel::render(frame, body, &ctx.screen.focus, &theme);
        if ctx.grid_visible {
            hits.cards = widgets::roster_grid::render(frame, take(), ctx.screen, &theme);
        }
    } else if ctx.grid_visible {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(body);
        hits.browse = widgets::fighter_panel::render(frame, columns[0], &ctx.screen.focus, &theme);
        hits.cards = widgets::roster_grid::render(frame, columns[1], ctx.screen, &theme);
    } else {
        hits.browse = widgets::fighter_panel::render(frame, body, &ctx.screen.focus, &theme);
    }

    hits.confirm_button = Some(widgets::controls::render(frame, take(), ctx.screen, &theme));
    widgets::notices::render(frame, take(), &ctx.screen.notices, &theme);

    if show_footer {
        widgets::footer::render(frame, take(), &theme);
    }

    hits
}

//! Roster grid of fighter cards.

use std::ops::Range;

use client_frontend_core::{CardView, PresentationMapper, SelectScreen};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::presentation::{theme::RatatuiTheme, ui::CARD_HEIGHT};

/// Render the grid and return the area of every card drawn.
///
/// Only the rows that fit are laid out, scrolled so the cursor's row stays
/// visible.
pub fn render(
    frame: &mut Frame,
    area: Rect,
    screen: &SelectScreen,
    theme: &RatatuiTheme,
) -> Vec<(usize, Rect)> {
    let cursor_row = screen.highlighted().map_or(0, |card| card.row);
    let inner = Block::default().borders(Borders::ALL).inner(area);
    let window = visible_rows(screen.rows, cursor_row, inner.height);

    let title = if window.len() < screen.rows {
        format!(
            " ROSTER rows {}-{} of {} ",
            window.start + 1,
            window.end,
            screen.rows
        )
    } else {
        " ROSTER ".to_string()
    };
    frame.render_widget(Block::default().borders(Borders::ALL).title(title), area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(CARD_HEIGHT); window.len()])
        .split(inner);

    let columns = u32::try_from(screen.columns.max(1)).unwrap_or(u32::MAX);
    let mut hits = Vec::new();

    for (row, row_area) in window.zip(rows.iter()) {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, columns); screen.columns])
            .split(*row_area);

        for card in row_cards(screen, row) {
            let Some(cell) = cells.get(card.column).copied() else {
                continue;
            };
            if cell.is_empty() {
                continue;
            }
            render_card(frame, cell, card, theme);
            hits.push((card.index, cell));
        }
    }

    hits
}

/// Grid rows that fit in `height` cells, centred on `cursor_row` where the
/// roster is taller than the panel.
pub(crate) fn visible_rows(total_rows: usize, cursor_row: usize, height: u16) -> Range<usize> {
    let capacity = usize::from(height / CARD_HEIGHT).max(1);
    if total_rows <= capacity {
        return 0..total_rows;
    }
    let first = cursor_row
        .saturating_sub(capacity / 2)
        .min(total_rows - capacity);
    first..first + capacity
}

fn row_cards(screen: &SelectScreen, row: usize) -> &[CardView] {
    let start = row.saturating_mul(screen.columns);
    let end = start.saturating_add(screen.columns).min(screen.cards.len());
    screen.cards.get(start..end).unwrap_or(&[])
}

fn render_card(frame: &mut Frame, area: Rect, card: &CardView, theme: &RatatuiTheme) {
    let style = theme.card_style(card);
    let border_type = if card.highlighted {
        BorderType::Thick
    } else {
        BorderType::Plain
    };

    let marker = if card.highlighted { "► " } else { "  " };
    let mut spans = vec![Span::styled(marker, style)];
    if let Some(key) = card.hotkey {
        spans.push(Span::styled(format!("{key} "), theme.dim()));
    }
    let mut name_style = theme.accent_style(Some(card.color));
    if card.selected {
        name_style = name_style.add_modifier(Modifier::UNDERLINED);
    }
    spans.push(Span::styled(card.name.clone(), name_style));
    if card.selected {
        spans.push(Span::styled(" ✔", style));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(style);
    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

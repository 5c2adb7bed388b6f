//! Confirm button and status line.

use client_frontend_core::{PresentationMapper, SelectScreen};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::Span,
    widgets::{Block, Borders, Paragraph},
};

use crate::presentation::theme::RatatuiTheme;

/// Render the controls row and return the button's area.
pub fn render(frame: &mut Frame, area: Rect, screen: &SelectScreen, theme: &RatatuiTheme) -> Rect {
    let label = screen.confirm_button.label();
    let button_width = label.len() as u16 + 6;

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(button_width), Constraint::Min(0)])
        .split(area);

    let button = Paragraph::new(Span::styled(
        label,
        theme.button_style(screen.confirm_button),
    ))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(button, chunks[0]);

    let status = Paragraph::new(screen.status.as_str())
        .block(Block::default().borders(Borders::ALL).title(" Status "));
    frame.render_widget(status, chunks[1]);

    chunks[0]
}

//! Header widget with the screen title and the committed fighter.

use client_frontend_core::{PresentationMapper, SelectScreen};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use select_core::Phase;

use crate::presentation::theme::RatatuiTheme;

pub fn render(frame: &mut Frame, area: Rect, screen: &SelectScreen, theme: &RatatuiTheme) {
    let phase = match screen.phase {
        Phase::Browsing => Span::styled(" [CHOOSING]", theme.dim()),
        Phase::Confirmed => Span::styled(
            " [LOCKED]",
            Style::default()
                .fg(Color::LightGreen)
                .add_modifier(Modifier::BOLD),
        ),
    };

    let text = Line::from(vec![
        Span::styled("FIGHTER SELECT", theme.title()),
        Span::raw(" | 1P: "),
        Span::styled(
            screen.headline.clone(),
            theme.accent_style(screen.focus.color),
        ),
        phase,
    ]);

    let paragraph = Paragraph::new(text).block(Block::default().borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}

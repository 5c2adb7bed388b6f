//! Ratatui theme implementation of PresentationMapper.

use client_frontend_core::{CardView, ConfirmButton, NoticeLevel, PresentationMapper};
use ratatui::style::{Color, Modifier, Style};
use select_core::{Rgb, STAT_MAX};

/// Ratatui-specific theme implementing PresentationMapper.
///
/// Cursor is yellow, the committed fighter blue, matching the arcade look of
/// the select screen.
pub struct RatatuiTheme;

impl RatatuiTheme {
    pub const CURSOR: Color = Color::Yellow;
    pub const SELECTED: Color = Color::LightBlue;

    pub fn color(rgb: Rgb) -> Color {
        Color::Rgb(rgb.r, rgb.g, rgb.b)
    }

    pub fn title(&self) -> Style {
        Style::default()
            .fg(Color::LightRed)
            .add_modifier(Modifier::BOLD)
    }

    pub fn dim(&self) -> Style {
        Style::default().fg(Color::DarkGray)
    }
}

impl PresentationMapper for RatatuiTheme {
    type Style = Style;

    fn card_style(&self, card: &CardView) -> Self::Style {
        // The selection ring overrides the cursor ring; the thick border and
        // the marker still show where the cursor is.
        match (card.highlighted, card.selected) {
            (_, true) => Style::default()
                .fg(Self::SELECTED)
                .add_modifier(Modifier::BOLD),
            (true, false) => Style::default()
                .fg(Self::CURSOR)
                .add_modifier(Modifier::BOLD),
            (false, false) => Style::default().fg(Color::Gray),
        }
    }

    fn accent_style(&self, color: Option<Rgb>) -> Self::Style {
        let fg = color.map(Self::color).unwrap_or(Color::White);
        Style::default().fg(fg).add_modifier(Modifier::BOLD)
    }

    fn stat_style(&self, value: u8) -> Self::Style {
        let fg = match value {
            v if v >= STAT_MAX - 2 => Color::LightGreen,
            v if v >= STAT_MAX / 2 => Color::Yellow,
            _ => Color::LightRed,
        };
        Style::default().fg(fg)
    }

    fn button_style(&self, button: ConfirmButton) -> Self::Style {
        match button {
            ConfirmButton::Ready => Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            ConfirmButton::Pending => Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD | Modifier::SLOW_BLINK),
            ConfirmButton::Locked => Style::default()
                .fg(Color::Black)
                .bg(Color::LightGreen)
                .add_modifier(Modifier::BOLD),
        }
    }

    fn notice_style(&self, level: NoticeLevel) -> Self::Style {
        match level {
            NoticeLevel::Info => Style::default().fg(Color::White),
            NoticeLevel::Success => Style::default()
                .fg(Color::LightGreen)
                .add_modifier(Modifier::BOLD),
            NoticeLevel::Warning => Style::default().fg(Color::Yellow),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(highlighted: bool, selected: bool) -> CardView {
        CardView {
            index: 0,
            id: "ryu".into(),
            name: "Ryu".into(),
            color: Rgb::new(1, 2, 3),
            row: 0,
            column: 0,
            highlighted,
            selected,
            hotkey: Some('1'),
        }
    }

    #[test]
    fn selection_ring_overrides_cursor() {
        let theme = RatatuiTheme;
        assert_eq!(
            theme.card_style(&card(true, true)).fg,
            Some(RatatuiTheme::SELECTED)
        );
        assert_eq!(
            theme.card_style(&card(true, false)).fg,
            Some(RatatuiTheme::CURSOR)
        );
        assert_eq!(
            theme.card_style(&card(false, true)).fg,
            Some(RatatuiTheme::SELECTED)
        );
    }

    #[test]
    fn accent_uses_fighter_colour() {
        let theme = RatatuiTheme;
        assert_eq!(
            theme.accent_style(Some(Rgb::new(0xFF, 0x6B, 0x6B))).fg,
            Some(Color::Rgb(0xFF, 0x6B, 0x6B))
        );
        assert_eq!(theme.accent_style(None).fg, Some(Color::White));
    }

    #[test]
    fn stat_colour_scales_with_value() {
        let theme = RatatuiTheme;
        assert_eq!(theme.stat_style(9).fg, Some(Color::LightGreen));
        assert_eq!(theme.stat_style(5).fg, Some(Color::Yellow));
        assert_eq!(theme.stat_style(2).fg, Some(Color::LightRed));
    }
}

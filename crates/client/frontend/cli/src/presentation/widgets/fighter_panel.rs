//! Viewer panel for the committed fighter: bio, stat bars and model asset.

use client_frontend_core::{FighterDetail, PresentationMapper};
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use select_core::{FighterStats, STAT_MAX};

use crate::presentation::theme::RatatuiTheme;

/// Clickable previous/next chevrons drawn on the panel's bottom border.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BrowseButtons {
    pub previous: Rect,
    pub next: Rect,
}

impl BrowseButtons {
    const WIDTH: u16 = 3;

    /// Chevron positions for a panel at `area`, or `None` when it is too
    /// small to hold both.
    pub fn for_panel(area: Rect) -> Option<Self> {
        if area.width < 4 * Self::WIDTH || area.height < 3 {
            return None;
        }
        let y = area.bottom() - 1;
        Some(Self {
            previous: Rect::new(area.x + 2, y, Self::WIDTH, 1),
            next: Rect::new(area.right() - 2 - Self::WIDTH, y, Self::WIDTH, 1),
        })
    }
}

/// Render the viewer panel and return its browse chevrons.
///
/// Always shows the selected fighter, never the cursor, so browsing the grid
/// does not swap the viewer.
pub fn render(
    frame: &mut Frame,
    area: Rect,
    fighter: &FighterDetail,
    theme: &RatatuiTheme,
) -> Option<BrowseButtons> {
    let accent = theme.accent_style(fighter.color);

    let mut lines = vec![
        Line::from(Span::styled(fighter.name.clone(), accent)),
        Line::from(Span::raw(fighter.description.clone())),
        Line::default(),
    ];
    lines.extend(stat_lines(&fighter.stats, theme));

    if !fighter.model_url.is_empty() {
        lines.push(Line::default());
        lines.push(Line::from(vec![
            Span::styled("Model: ", theme.dim()),
            Span::raw(fighter.model_url.clone()),
        ]));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(accent)
        .title(" PLAYER 1 ");
    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });

    frame.render_widget(paragraph, area);

    let buttons = BrowseButtons::for_panel(area)?;
    frame.render_widget(Paragraph::new(Span::styled(" ‹ ", accent)), buttons.previous);
    frame.render_widget(Paragraph::new(Span::styled(" › ", accent)), buttons.next);
    Some(buttons)
}

fn stat_lines<'a>(stats: &FighterStats, theme: &RatatuiTheme) -> Vec<Line<'a>> {
    stats
        .iter()
        .map(|(kind, value)| {
            let filled = value.min(STAT_MAX) as usize;
            Line::from(vec![
                Span::styled(format!("{:<4}", kind.abbreviation()), Style::default()),
                Span::styled("█".repeat(filled), theme.stat_style(value)),
                Span::styled(
                    "░".repeat(STAT_MAX as usize - filled),
                    theme.dim(),
                ),
                Span::raw(format!(" {value:>2}")),
            ])
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chevrons_sit_on_the_bottom_border() {
        let buttons = BrowseButtons::for_panel(Rect::new(10, 5, 40, 20)).unwrap();
        assert_eq!(buttons.previous, Rect::new(12, 24, 3, 1));
        assert_eq!(buttons.next, Rect::new(45, 24, 3, 1));

        assert!(BrowseButtons::for_panel(Rect::new(0, 0, 11, 20)).is_none());
        assert!(BrowseButtons::for_panel(Rect::new(0, 0, 40, 2)).is_none());
    }

    #[test]
    fn stat_bars_fill_to_value() {
        let lines = stat_lines(&FighterStats::new(10, 0, 7, 3), &RatatuiTheme);
        let text: Vec<String> = lines
            .iter()
            .map(|line| line.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect();

        assert_eq!(text[0], "STR ██████████ 10");
        assert_eq!(text[1], "SPD ░░░░░░░░░░  0");
        assert_eq!(text[2], "TEC ███████░░░  7");
    }
}

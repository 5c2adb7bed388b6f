//! Key hint footer (wide layout only).

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::presentation::theme::RatatuiTheme;

const HINTS: &[(&str, &str)] = &[
    ("arrows/hjkl", "move"),
    ("enter", "pick"),
    ("tab", "cycle"),
    ("[ ]", "browse"),
    ("c", "confirm"),
    ("esc", "cancel"),
    ("g", "grid"),
    ("q", "quit"),
];

pub fn render(frame: &mut Frame, area: Rect, theme: &RatatuiTheme) {
    let spans: Vec<Span> = HINTS
        .iter()
        .flat_map(|(key, action)| {
            [
                Span::styled(*key, theme.title()),
                Span::styled(format!(" {action}  "), theme.dim()),
            ]
        })
        .collect();

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

//! Notice panel, newest first.

use client_frontend_core::{Notice, PresentationMapper};
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

use crate::presentation::theme::RatatuiTheme;

pub fn render(frame: &mut Frame, area: Rect, notices: &[Notice], theme: &RatatuiTheme) {
    let items: Vec<ListItem> = if notices.is_empty() {
        vec![ListItem::new(Span::styled("No notices yet", theme.dim()))]
    } else {
        notices
            .iter()
            .map(|notice| {
                let style = theme.notice_style(notice.level);
                let mut spans = vec![Span::styled(notice.title.clone(), style)];
                if !notice.body.is_empty() {
                    spans.push(Span::raw(": "));
                    spans.push(Span::raw(notice.body.clone()));
                }
                ListItem::new(Line::from(spans))
            })
            .collect()
    };

    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(" Notices "));
    frame.render_widget(list, area);
}

//! Placeholder shown in place of the grid when nothing is visible

use crate::output::{EMPTY_TITLE, empty_message};
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

pub struct EmptyState<'a> {
    query: &'a str,
    theme: &'a Theme,
}

impl<'a> EmptyState<'a> {
    #[must_use]
    pub const fn new(query: &'a str, theme: &'a Theme) -> Self {
        Self { query, theme }
    }
}

impl Widget for EmptyState<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let top = area.height.saturating_sub(3) / 2;
        let lines = vec![
            Line::from(Span::styled(EMPTY_TITLE, self.theme.title_style())),
            Line::default(),
            Line::from(Span::styled(empty_message(self.query), self.theme.dimmed_style())),
        ];
        let body = Rect::new(area.x, area.y + top, area.width, area.height - top);
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(body, buf);
    }
}

//! Search bar widget for query input

use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Search bar widget that displays the query with cursor
pub struct SearchBar<'a> {
    /// Current query text
    query: &'a str,
    /// Cursor position in the query (byte offset on a char boundary)
    cursor: usize,
    /// Placeholder shown while the query is empty
    placeholder: &'a str,
    theme: &'a Theme,
    /// Whether typing goes to this widget (false while the modal is mounted)
    focused: bool,
}

impl<'a> SearchBar<'a> {
    /// Create a new search bar widget
    #[must_use]
    pub const fn new(query: &'a str, cursor: usize, placeholder: &'a str, theme: &'a Theme) -> Self {
        Self {
            query,
            cursor,
            placeholder,
            theme,
            focused: true,
        }
    }

    /// Set focus state
    #[must_use]
    pub const fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl Widget for SearchBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            self.theme.cursor_style()
        } else {
            self.theme.border_style()
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(" Search ");

        let inner = block.inner(area);
        block.render(area, buf);

        let cursor = Span::styled("│", Style::default().add_modifier(Modifier::SLOW_BLINK));
        let mut spans = vec![Span::styled("/", self.theme.dimmed_style()), Span::raw(" ")];

        if self.query.is_empty() {
            if self.focused {
                spans.push(cursor);
            }
            spans.push(Span::styled(self.placeholder, self.theme.dimmed_style()));
        } else {
            let at = self.cursor.min(self.query.len());
            let (before, after) = self.query.split_at(at);
            spans.push(Span::raw(before));
            if self.focused {
                spans.push(cursor);
            }
            spans.push(Span::raw(after));
        }

        Paragraph::new(Line::from(spans)).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::ratatui_adapter::widgets::buffer_lines;

    #[test]
    fn test_placeholder_when_empty() {
        let theme = Theme::default();
        let mut buf = Buffer::empty(Rect::new(0, 0, 40, 3));
        SearchBar::new("", 0, "Search assets...", &theme).render(buf.area, &mut buf);
        let lines = buffer_lines(&buf);
        assert!(lines[0].contains("Search"));
        assert!(lines[1].contains("│Search assets..."));
    }

    #[test]
    fn test_cursor_splits_query() {
        let theme = Theme::default();
        let mut buf = Buffer::empty(Rect::new(0, 0, 40, 3));
        SearchBar::new("media", 2, "", &theme).render(buf.area, &mut buf);
        assert!(buffer_lines(&buf)[1].contains("me│dia"));
    }

    #[test]
    fn test_unfocused_hides_cursor() {
        let theme = Theme::default();
        let mut buf = Buffer::empty(Rect::new(0, 0, 40, 3));
        SearchBar::new("media", 2, "", &theme)
            .focused(false)
            .render(buf.area, &mut buf);
        assert!(buffer_lines(&buf)[1].contains("/ media"));
    }
}

//! Help bar widget for displaying keybind hints

use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// A keybind hint to display in the help bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyHint {
    /// Key combination (e.g., "TAB", "Enter")
    pub key: String,
    /// Action description (e.g., "category", "open")
    pub action: String,
}

impl KeyHint {
    /// Create a new key hint
    #[must_use]
    pub fn new(key: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            action: action.into(),
        }
    }
}

/// Help bar widget that displays keybind hints at the bottom
///
/// A status message, when present, replaces the hints.
pub struct HelpBar<'a> {
    hints: &'a [KeyHint],
    status: Option<&'a str>,
    theme: &'a Theme,
}

impl<'a> HelpBar<'a> {
    /// Create a new help bar widget
    #[must_use]
    pub const fn new(hints: &'a [KeyHint], theme: &'a Theme) -> Self {
        Self {
            hints,
            status: None,
            theme,
        }
    }

    #[must_use]
    pub const fn with_status(mut self, status: Option<&'a str>) -> Self {
        self.status = status;
        self
    }

    /// Hints while browsing the grid
    #[must_use]
    pub fn grid_hints() -> Vec<KeyHint> {
        vec![
            KeyHint::new("type", "search"),
            KeyHint::new("TAB", "category"),
            KeyHint::new("↑/↓", "move"),
            KeyHint::new("Enter", "details"),
            KeyHint::new("ESC", "quit"),
        ]
    }

    /// Hints while the modal is mounted
    #[must_use]
    pub fn modal_hints() -> Vec<KeyHint> {
        vec![
            KeyHint::new("TAB", "next"),
            KeyHint::new("Enter", "activate"),
            KeyHint::new("ESC", "close"),
            KeyHint::new("↑/↓", "scroll"),
        ]
    }
}

impl Widget for HelpBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if let Some(status) = self.status {
            Paragraph::new(Span::styled(status, self.theme.error_style())).render(area, buf);
            return;
        }

        let mut spans = Vec::new();
        for (i, hint) in self.hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled("  ", self.theme.dimmed_style()));
            }
            spans.push(Span::styled(hint.key.as_str(), self.theme.cursor_style()));
            spans.push(Span::styled(":", self.theme.dimmed_style()));
            spans.push(Span::raw(hint.action.as_str()));
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::ratatui_adapter::widgets::buffer_lines;

    #[test]
    fn test_hints_rendered_in_order() {
        let theme = Theme::default();
        let hints = HelpBar::modal_hints();
        let mut buf = Buffer::empty(Rect::new(0, 0, 60, 1));
        HelpBar::new(&hints, &theme).render(buf.area, &mut buf);
        assert!(buffer_lines(&buf)[0].starts_with("TAB:next  Enter:activate  ESC:close"));
    }

    #[test]
    fn test_status_replaces_hints() {
        let theme = Theme::default();
        let hints = HelpBar::grid_hints();
        let mut buf = Buffer::empty(Rect::new(0, 0, 60, 1));
        HelpBar::new(&hints, &theme)
            .with_status(Some("Failed to open link"))
            .render(buf.area, &mut buf);
        let line = &buffer_lines(&buf)[0];
        assert!(line.starts_with("Failed to open link"));
        assert!(!line.contains("search"));
    }
}

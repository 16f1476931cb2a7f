//! Color theme definitions for the showcase TUI
//!
//! Defines colors and styles used throughout the application.

use ratatui::style::{Color, Modifier, Style};

/// Theme configuration for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    /// Background color for the highlighted card, chip, or modal control
    pub selection_bg: Color,
    /// Foreground color for highlighted elements
    pub selection_fg: Color,
    /// Color for the search cursor and focused borders
    pub cursor: Color,
    /// Color for card and modal titles
    pub title: Color,
    /// Color for category tags
    pub category: Color,
    /// Color for link entries
    pub link: Color,
    /// Color for error and status messages
    pub error: Color,
    /// Color for borders
    pub border: Color,
    /// Color for dimmed/inactive text
    pub dimmed: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Create a dark theme (default)
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            selection_bg: Color::Blue,
            selection_fg: Color::White,
            cursor: Color::Cyan,
            title: Color::White,
            category: Color::Magenta,
            link: Color::Cyan,
            error: Color::Red,
            border: Color::DarkGray,
            dimmed: Color::DarkGray,
        }
    }

    /// Style for the highlighted element
    #[must_use]
    pub fn selected_style(&self) -> Style {
        Style::default()
            .bg(self.selection_bg)
            .fg(self.selection_fg)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for the search cursor and focused borders
    #[must_use]
    pub fn cursor_style(&self) -> Style {
        Style::default()
            .fg(self.cursor)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn title_style(&self) -> Style {
        Style::default()
            .fg(self.title)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn category_style(&self) -> Style {
        Style::default().fg(self.category)
    }

    #[must_use]
    pub fn link_style(&self) -> Style {
        Style::default()
            .fg(self.link)
            .add_modifier(Modifier::UNDERLINED)
    }

    #[must_use]
    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error)
    }

    #[must_use]
    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    #[must_use]
    pub fn dimmed_style(&self) -> Style {
        Style::default().fg(self.dimmed)
    }

    /// Style applied over the whole modal during its exit transition
    #[must_use]
    pub fn fading_style(&self) -> Style {
        Style::default()
            .fg(self.dimmed)
            .add_modifier(Modifier::DIM)
    }
}

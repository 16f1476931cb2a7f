//! Modal overlay showing one asset's full details

use crate::assets::{Asset, AssetBody, DetailEntry};
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

/// Label of the close control
pub const CLOSE_LABEL: &str = "[ Close ]";

/// Shown beside the close control when the body does not fit
const SCROLL_HINT: &str = "↑/↓ scroll";

/// Panel size as a percentage of the screen
const PANEL_WIDTH: u16 = 70;
const PANEL_HEIGHT: u16 = 70;

/// Calculate the centered panel area for a screen `area`
///
/// Clicks inside this rectangle belong to the panel; anything else is backdrop.
#[must_use]
pub fn panel_area(area: Rect) -> Rect {
    centered_rect(PANEL_WIDTH, PANEL_HEIGHT, area)
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let popup_layout = Layout::vertical([
        Constraint::Percentage((100 - height.min(90)) / 2),
        Constraint::Percentage(height.min(90)),
        Constraint::Percentage((100 - height.min(90)) / 2),
    ])
    .split(area);

    Layout::horizontal([
        Constraint::Percentage((100 - width.min(90)) / 2),
        Constraint::Percentage(width.min(90)),
        Constraint::Percentage((100 - width.min(90)) / 2),
    ])
    .split(popup_layout[1])[1]
}

/// Area of the scrolling body for a screen `area`
///
/// The close control sits on the last row of the panel and never scrolls.
#[must_use]
pub fn body_area(area: Rect) -> Rect {
    let inner = Block::default().borders(Borders::ALL).inner(panel_area(area));
    let [body, _] = Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(inner);
    body
}

/// Greedy word wrap; a word longer than `width` keeps its own row
fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut rows = Vec::new();
    let mut row = String::new();
    let mut row_len = 0;

    for word in text.split_whitespace() {
        let len = word.chars().count();
        if row_len > 0 && row_len + 1 + len > width {
            rows.push(std::mem::take(&mut row));
            row_len = 0;
        }
        if row_len > 0 {
            row.push(' ');
            row_len += 1;
        }
        row.push_str(word);
        row_len += len;
    }

    if !row.is_empty() || rows.is_empty() {
        rows.push(row);
    }
    rows
}

/// Bullet item wrapped under its marker
fn bullet_rows(text: &str, width: usize) -> Vec<Line<'static>> {
    wrap_words(text, width.saturating_sub(4))
        .into_iter()
        .enumerate()
        .map(|(i, row)| {
            let indent = if i == 0 { "  • " } else { "    " };
            Line::from(vec![Span::raw(indent), Span::raw(row)])
        })
        .collect()
}

/// Wrapped body rows plus the row each link entry landed on
struct ModalBody<'a> {
    lines: Vec<Line<'a>>,
    link_rows: Vec<usize>,
}

/// Modal widget
///
/// `focus` indexes the modal's focusables: 0 is the close control, `1 + i`
/// is the i-th link entry. The body is wrapped to the panel width and
/// scrolled by `scroll` rows; with `follow_focus` set the offset is moved
/// just enough to bring the focused link on screen.
pub struct AssetModal<'a> {
    asset: &'a Asset,
    focus: usize,
    scroll: usize,
    follow_focus: bool,
    closing: bool,
    theme: &'a Theme,
}

impl<'a> AssetModal<'a> {
    #[must_use]
    pub const fn new(asset: &'a Asset, focus: usize, theme: &'a Theme) -> Self {
        Self {
            asset,
            focus,
            scroll: 0,
            follow_focus: true,
            closing: false,
            theme,
        }
    }

    /// Draw in the faded exit style
    #[must_use]
    pub const fn closing(mut self, closing: bool) -> Self {
        self.closing = closing;
        self
    }

    /// Set the body scroll offset
    #[must_use]
    pub const fn scroll(mut self, scroll: usize, follow_focus: bool) -> Self {
        self.scroll = scroll;
        self.follow_focus = follow_focus;
        self
    }

    /// Scroll offset actually used when drawing on a screen of `area`
    ///
    /// Clamped so the last body row never scrolls above the bottom edge.
    #[must_use]
    pub fn fit_scroll(&self, area: Rect) -> usize {
        let body_rect = body_area(area);
        let body = self.build_body(usize::from(body_rect.width));
        let height = usize::from(body_rect.height).max(1);
        let mut scroll = self.scroll;

        if self.follow_focus
            && let Some(&row) = self
                .focus
                .checked_sub(1)
                .and_then(|link| body.link_rows.get(link))
        {
            if row < scroll {
                scroll = row;
            } else if row >= scroll + height {
                scroll = row + 1 - height;
            }
        }

        scroll.min(body.lines.len().saturating_sub(height))
    }

    fn focus_style(&self, index: usize, normal: Style) -> Style {
        if !self.closing && self.focus == index {
            self.theme.selected_style()
        } else {
            normal
        }
    }

    fn link_line(&self, label: &'a str, url: &'a str, link_index: usize) -> Line<'a> {
        Line::from(vec![
            Span::raw("  ↗ "),
            Span::styled(label, self.focus_style(link_index, self.theme.link_style())),
            Span::styled(format!("  {url}"), self.theme.dimmed_style()),
        ])
    }

    /// Build body rows for a content area `width` columns wide
    fn build_body(&self, width: usize) -> ModalBody<'a> {
        let asset: &'a Asset = self.asset;
        let mut lines = vec![
            Line::from(Span::styled(
                format!("#{}", asset.category),
                self.theme.category_style(),
            )),
            Line::default(),
        ];
        lines.extend(
            wrap_words(&asset.description, width)
                .into_iter()
                .map(Line::from),
        );
        lines.push(Line::default());
        let mut link_rows = Vec::new();

        match &asset.body {
            AssetBody::Sections(sections) => {
                for section in sections {
                    lines.push(Line::from(Span::styled(
                        section.title.as_str(),
                        self.theme.title_style(),
                    )));
                    for item in &section.details {
                        lines.extend(bullet_rows(item, width));
                    }
                    lines.push(Line::default());
                }
            }
            AssetBody::Details(entries) => {
                for entry in entries {
                    match entry {
                        DetailEntry::Text(text) => lines.extend(bullet_rows(text, width)),
                        DetailEntry::Link { label, url } => {
                            link_rows.push(lines.len());
                            lines.push(self.link_line(label, url, link_rows.len()));
                        }
                    }
                }
                lines.push(Line::default());
            }
            AssetBody::Empty => {
                lines.push(Line::from(Span::styled(
                    "No further details.",
                    self.theme.dimmed_style(),
                )));
                lines.push(Line::default());
            }
        }

        ModalBody { lines, link_rows }
    }
}

impl Widget for AssetModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let panel = panel_area(area);
        Clear.render(panel, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.cursor_style())
            .title(Span::styled(format!(" {} ", self.asset.title), self.theme.title_style()))
            .title_alignment(Alignment::Center);
        let inner = block.inner(panel);
        block.render(panel, buf);

        let [content, controls] =
            Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(inner);
        let [hint, close] = Layout::horizontal([
            Constraint::Min(0),
            Constraint::Length(CLOSE_LABEL.chars().count() as u16),
        ])
        .areas(controls);

        let scroll = self.fit_scroll(area);
        let body = self.build_body(usize::from(content.width));
        let overflows = body.lines.len() > usize::from(content.height);

        Paragraph::new(body.lines)
            .scroll((u16::try_from(scroll).unwrap_or(u16::MAX), 0))
            .render(content, buf);

        if overflows {
            Paragraph::new(Span::styled(SCROLL_HINT, self.theme.dimmed_style())).render(hint, buf);
        }
        Paragraph::new(Span::styled(
            CLOSE_LABEL,
            self.focus_style(0, self.theme.cursor_style()),
        ))
        .render(close, buf);

        if self.closing {
            buf.set_style(panel, self.theme.fading_style());
        }
    }
}

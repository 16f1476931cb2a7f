//! Asset cards and the responsive grid they are laid out in

use crate::assets::Asset;
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

/// Rows taken by one card, borders included
pub const CARD_HEIGHT: u16 = 6;

/// Number of grid columns for a terminal `width`
#[must_use]
pub const fn grid_columns(width: u16) -> usize {
    if width < 60 {
        1
    } else if width < 100 {
        2
    } else {
        3
    }
}

/// Number of card rows that fit in `area`
#[must_use]
pub const fn rows_that_fit(area: Rect) -> usize {
    let rows = area.height / CARD_HEIGHT;
    if rows == 0 { 1 } else { rows as usize }
}

/// Areas for `count` cards starting at card row `first_row`
///
/// Cards are placed left to right, top to bottom. Rows that would fall
/// outside `area` are not returned, so the result may be shorter than
/// `count - first_row * columns`.
#[must_use]
pub fn grid_layout(area: Rect, count: usize, columns: usize, first_row: usize) -> Vec<Rect> {
    let columns = columns.max(1);
    let column_constraints = vec![Constraint::Ratio(1, columns as u32); columns];
    let max_rows = rows_that_fit(area);
    let total_rows = count.div_ceil(columns);

    let mut areas = Vec::new();
    for (visible_row, row) in (first_row..total_rows).take(max_rows).enumerate() {
        let y = area.y + visible_row as u16 * CARD_HEIGHT;
        let height = CARD_HEIGHT.min(area.bottom().saturating_sub(y));
        let row_area = Rect::new(area.x, y, area.width, height);
        let cells = Layout::horizontal(column_constraints.clone()).split(row_area);
        let in_row = (count - row * columns).min(columns);
        areas.extend(cells.iter().take(in_row).copied());
    }
    areas
}

/// One asset card: title, wrapped description, category tag
pub struct AssetCard<'a> {
    asset: &'a Asset,
    selected: bool,
    theme: &'a Theme,
}

impl<'a> AssetCard<'a> {
    #[must_use]
    pub const fn new(asset: &'a Asset, selected: bool, theme: &'a Theme) -> Self {
        Self {
            asset,
            selected,
            theme,
        }
    }
}

impl Widget for AssetCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (border_style, title_style) = if self.selected {
            (self.theme.cursor_style(), self.theme.selected_style())
        } else {
            (self.theme.border_style(), self.theme.title_style())
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(Span::styled(format!(" {} ", self.asset.title), title_style));
        let inner = block.inner(area);
        block.render(area, buf);

        let [body, footer] = Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(inner);

        Paragraph::new(self.asset.description.as_str())
            .wrap(Wrap { trim: true })
            .render(body, buf);
        Paragraph::new(Line::from(Span::styled(
            format!("#{}", self.asset.category),
            self.theme.category_style(),
        )))
        .render(footer, buf);
    }
}

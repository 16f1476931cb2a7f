//! Category chip row

use crate::filter::CategoryFilter;
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::Span,
    widgets::{Block, Borders, Widget},
};

/// Gap between chips, in columns
const CHIP_GAP: u16 = 1;

fn chip_text(category: &CategoryFilter) -> String {
    format!(" {} ", category.label())
}

/// Screen areas of each chip, in registry order
///
/// Chips that do not fit on the row are left out.
#[must_use]
pub fn chip_areas(categories: &[CategoryFilter], area: Rect) -> Vec<Rect> {
    let mut x = area.x;
    let right = area.right();
    let mut areas = Vec::with_capacity(categories.len());
    for category in categories {
        let width = u16::try_from(Span::raw(chip_text(category)).width()).unwrap_or(u16::MAX);
        if x.saturating_add(width) > right {
            break;
        }
        areas.push(Rect::new(x, area.y, width, 1));
        x = x.saturating_add(width + CHIP_GAP);
    }
    areas
}

/// Row of category chips with the active one highlighted
pub struct CategoryBar<'a> {
    categories: &'a [CategoryFilter],
    active: &'a CategoryFilter,
    theme: &'a Theme,
}

impl<'a> CategoryBar<'a> {
    #[must_use]
    pub const fn new(categories: &'a [CategoryFilter], active: &'a CategoryFilter, theme: &'a Theme) -> Self {
        Self {
            categories,
            active,
            theme,
        }
    }

    /// Area inside the border where chips are laid out
    #[must_use]
    pub fn inner(area: Rect) -> Rect {
        Block::default().borders(Borders::ALL).inner(area)
    }
}

impl Widget for CategoryBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style())
            .title(" Categories ");
        let inner = block.inner(area);
        block.render(area, buf);

        for (category, chip) in self.categories.iter().zip(chip_areas(self.categories, inner)) {
            let style = if category == self.active {
                self.theme.selected_style()
            } else {
                self.theme.category_style()
            };
            buf.set_string(chip.x, chip.y, chip_text(category), style);
        }
    }
}

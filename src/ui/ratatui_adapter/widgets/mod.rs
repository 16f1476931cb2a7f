//! Ratatui widgets for the showcase TUI
//!
//! Custom widgets for rendering the showcase interface.

mod asset_modal;
mod card_grid;
mod category_bar;
mod empty_state;
mod help_bar;
mod search_bar;

pub use asset_modal::{AssetModal, CLOSE_LABEL, panel_area};
pub use card_grid::{AssetCard, CARD_HEIGHT, grid_columns, grid_layout, rows_that_fit};
pub use category_bar::{CategoryBar, chip_areas};
pub use empty_state::EmptyState;
pub use help_bar::{HelpBar, KeyHint};
pub use search_bar::SearchBar;

/// Rows of a rendered buffer as plain strings
#[cfg(test)]
pub(crate) fn buffer_lines(buf: &ratatui::buffer::Buffer) -> Vec<String> {
    let area = buf.area;
    (area.top()..area.bottom())
        .map(|y| {
            (area.left()..area.right())
                .map(|x| buf[(x, y)].symbol())
                .collect()
        })
        .collect()
}

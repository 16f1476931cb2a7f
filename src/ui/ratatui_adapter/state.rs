//! View state for the showcase TUI
//!
//! [`ShowcaseView`] is the terminal implementation of [`View`]: the hub
//! pushes grid, category, and modal updates into it, and the draw pass
//! reads them back out. It also owns what only the terminal knows about,
//! namely the query being typed, the grid cursor, modal focus, and the
//! screen areas from the last draw used for mouse hit testing.

use crate::assets::{Asset, AssetId};
use crate::filter::CategoryFilter;
use crate::hub::{ModalRender, View};
use crate::modal::FocusHandle;
use ratatui::layout::{Position, Rect};

/// Card handles live above this bit so they never collide with modal handles
const CARD_HANDLE_BASE: u64 = 1 << 32;

/// Handle of the modal's close control
pub const CLOSE_HANDLE: FocusHandle = FocusHandle::new(0);

/// Handle of the grid card showing `id`
#[must_use]
pub const fn card_handle(id: AssetId) -> FocusHandle {
    FocusHandle::new(CARD_HANDLE_BASE | id.get() as u64)
}

/// Handle of the modal's `index`-th link
#[must_use]
pub const fn link_handle(index: usize) -> FocusHandle {
    FocusHandle::new(1 + index as u64)
}

/// Asset currently drawn in the modal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalContent {
    pub asset: Asset,
    pub closing: bool,
}

impl ModalContent {
    /// URLs of the link entries, in display order
    #[must_use]
    pub fn links(&self) -> Vec<&str> {
        self.asset.body.links().filter_map(|entry| entry.url()).collect()
    }
}

/// Screen areas recorded during the last draw
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HitAreas {
    pub cards: Vec<(AssetId, Rect)>,
    pub chips: Vec<(CategoryFilter, Rect)>,
    pub panel: Option<Rect>,
}

/// Terminal view state
#[derive(Debug, Default)]
pub struct ShowcaseView {
    /// Query text as typed
    pub query: String,
    /// Cursor position in the query (byte offset)
    pub query_cursor: usize,
    /// Visible assets, in grid order
    pub cards: Vec<Asset>,
    pub categories: Vec<CategoryFilter>,
    pub active_category: CategoryFilter,
    /// Index of the highlighted card
    pub grid_cursor: usize,
    /// First card row on screen
    pub grid_scroll: usize,
    pub modal: Option<ModalContent>,
    /// Index into [`Self::focusables`] while the modal is mounted
    pub modal_focus: usize,
    /// First body row of the modal on screen
    pub modal_scroll: usize,
    /// Whether the next draw should bring the focused link on screen
    pub modal_follow_focus: bool,
    /// Transient message for the help bar
    pub status: Option<String>,
    pub hits: HitAreas,
}

impl ShowcaseView {
    /// Create a view seeded with an initial query
    #[must_use]
    pub fn new(query: impl Into<String>) -> Self {
        let query = query.into();
        Self {
            query_cursor: query.len(),
            query,
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn is_modal_mounted(&self) -> bool {
        self.modal.is_some()
    }

    /// Asset under the grid cursor
    #[must_use]
    pub fn highlighted(&self) -> Option<&Asset> {
        self.cards.get(self.grid_cursor)
    }

    /// Focusable elements of the mounted modal: close control, then links
    #[must_use]
    pub fn focusables(&self) -> Vec<FocusHandle> {
        let Some(modal) = &self.modal else {
            return Vec::new();
        };
        std::iter::once(CLOSE_HANDLE)
            .chain((0..modal.links().len()).map(link_handle))
            .collect()
    }

    /// Handle of the focused modal element
    #[must_use]
    pub fn current_focus(&self) -> Option<FocusHandle> {
        self.focusables().get(self.modal_focus).copied()
    }

    /// URL of the focused link, if a link (not the close control) has focus
    #[must_use]
    pub fn focused_link(&self) -> Option<&str> {
        let modal = self.modal.as_ref()?;
        let index = self.modal_focus.checked_sub(1)?;
        modal.links().get(index).copied()
    }

    // Grid navigation

    pub fn cursor_prev(&mut self) {
        self.grid_cursor = self.grid_cursor.saturating_sub(1);
    }

    pub fn cursor_next(&mut self) {
        if self.grid_cursor + 1 < self.cards.len() {
            self.grid_cursor += 1;
        }
    }

    pub const fn cursor_first(&mut self) {
        self.grid_cursor = 0;
    }

    pub fn cursor_last(&mut self) {
        self.grid_cursor = self.cards.len().saturating_sub(1);
    }

    /// Keep the cursor's row on screen given `columns` and `rows` that fit
    pub fn adjust_scroll(&mut self, columns: usize, rows: usize) {
        let row = self.grid_cursor / columns.max(1);
        let rows = rows.max(1);
        if row < self.grid_scroll {
            self.grid_scroll = row;
        } else if row >= self.grid_scroll + rows {
            self.grid_scroll = row + 1 - rows;
        }
    }

    /// Category after (or before) the active one, wrapping around
    #[must_use]
    pub fn cycle_category(&self, backwards: bool) -> Option<CategoryFilter> {
        let len = self.categories.len();
        if len == 0 {
            return None;
        }
        let current = self
            .categories
            .iter()
            .position(|c| *c == self.active_category)
            .unwrap_or(0);
        let next = if backwards {
            (current + len - 1) % len
        } else {
            (current + 1) % len
        };
        self.categories.get(next).cloned()
    }

    // Modal scrolling

    /// Scroll the modal body up; the offset stops following focus
    pub const fn modal_scroll_up(&mut self, rows: usize) {
        self.modal_scroll = self.modal_scroll.saturating_sub(rows);
        self.modal_follow_focus = false;
    }

    /// Scroll the modal body down; the draw pass clamps it to the content
    pub const fn modal_scroll_down(&mut self, rows: usize) {
        self.modal_scroll = self.modal_scroll.saturating_add(rows);
        self.modal_follow_focus = false;
    }

    // Query editing

    pub fn query_push(&mut self, c: char) {
        self.query.insert(self.query_cursor, c);
        self.query_cursor += c.len_utf8();
    }

    /// Remove the character before the cursor; returns whether the query changed
    pub fn query_backspace(&mut self) -> bool {
        if self.query_cursor == 0 {
            return false;
        }
        let prev_char_boundary = self.query[..self.query_cursor]
            .char_indices()
            .next_back()
            .map_or(0, |(i, _)| i);
        self.query.remove(prev_char_boundary);
        self.query_cursor = prev_char_boundary;
        true
    }

    /// Delete the character under the cursor; returns whether the query changed
    pub fn query_delete(&mut self) -> bool {
        if self.query_cursor >= self.query.len() {
            return false;
        }
        self.query.remove(self.query_cursor);
        true
    }

    pub fn query_cursor_left(&mut self) {
        if self.query_cursor > 0 {
            self.query_cursor = self.query[..self.query_cursor]
                .char_indices()
                .next_back()
                .map_or(0, |(i, _)| i);
        }
    }

    pub fn query_cursor_right(&mut self) {
        if self.query_cursor < self.query.len() {
            self.query_cursor = self.query[self.query_cursor..]
                .char_indices()
                .nth(1)
                .map_or(self.query.len(), |(i, _)| self.query_cursor + i);
        }
    }

    /// Clear the query; returns whether it was non-empty
    pub fn query_clear(&mut self) -> bool {
        let changed = !self.query.is_empty();
        self.query.clear();
        self.query_cursor = 0;
        changed
    }

    // Mouse hit testing

    #[must_use]
    pub fn card_at(&self, column: u16, row: u16) -> Option<AssetId> {
        let position = Position::new(column, row);
        self.hits
            .cards
            .iter()
            .find(|(_, area)| area.contains(position))
            .map(|(id, _)| *id)
    }

    #[must_use]
    pub fn chip_at(&self, column: u16, row: u16) -> Option<&CategoryFilter> {
        let position = Position::new(column, row);
        self.hits
            .chips
            .iter()
            .find(|(_, area)| area.contains(position))
            .map(|(category, _)| category)
    }

    #[must_use]
    pub fn panel_contains(&self, column: u16, row: u16) -> bool {
        self.hits
            .panel
            .is_some_and(|panel| panel.contains(Position::new(column, row)))
    }
}

impl View for ShowcaseView {
    fn render_grid(&mut self, visible: &[&Asset]) {
        self.cards = visible.iter().map(|asset| (*asset).clone()).collect();
        if self.grid_cursor >= self.cards.len() {
            self.grid_cursor = self.cards.len().saturating_sub(1);
        }
    }

    fn render_categories(&mut self, categories: &[CategoryFilter], active: &CategoryFilter) {
        self.categories = categories.to_vec();
        self.active_category = active.clone();
    }

    fn render_modal(&mut self, modal: ModalRender<'_>) {
        let previous = self.modal.as_ref().map(|m| m.asset.id);
        self.modal = match modal {
            ModalRender::Hidden => None,
            ModalRender::Open(asset) => Some(ModalContent {
                asset: asset.clone(),
                closing: false,
            }),
            ModalRender::Closing(asset) => Some(ModalContent {
                asset: asset.clone(),
                closing: true,
            }),
        };
        if self.modal.as_ref().map(|m| m.asset.id) != previous {
            self.modal_focus = 0;
            self.modal_scroll = 0;
            self.modal_follow_focus = true;
        }
    }

    fn focus_close_control(&mut self) {
        self.modal_focus = 0;
        self.modal_follow_focus = true;
    }

    fn focus(&mut self, target: FocusHandle) -> bool {
        if target.raw() & CARD_HANDLE_BASE != 0 {
            let Some(index) = self
                .cards
                .iter()
                .position(|asset| card_handle(asset.id) == target)
            else {
                return false;
            };
            self.grid_cursor = index;
            return true;
        }

        match self.focusables().iter().position(|h| *h == target) {
            Some(index) => {
                self.modal_focus = index;
                self.modal_follow_focus = true;
                true
            }
            None => false,
        }
    }

    fn step_focus(&mut self, backwards: bool) {
        let count = self.focusables().len();
        if backwards {
            self.modal_focus = self.modal_focus.saturating_sub(1);
        } else if self.modal_focus + 1 < count {
            self.modal_focus += 1;
        }
        self.modal_follow_focus = true;
    }
}

//! Event handling for the showcase TUI
//!
//! Maps keyboard and mouse input to hub events. Query editing and grid
//! navigation are handled on the view directly; everything the core cares
//! about comes back as [`Action::Dispatch`].

use super::state::{ShowcaseView, card_handle};
use crate::hub::HubEvent;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use std::time::Duration;

/// Result of handling an event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Forward to the hub
    Dispatch(HubEvent),
    /// Open a link in the system browser
    OpenLink(String),
    /// Leave the showcase
    Quit,
    /// View-local change; redraw only
    Continue,
    /// No action taken
    Ignored,
}

/// Modal body rows moved by PageUp / PageDown
const MODAL_PAGE: usize = 10;

/// Modal body rows moved per mouse wheel notch
const WHEEL_ROWS: usize = 3;

fn is_ctrl_c(key: &KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}

fn query_changed(view: &ShowcaseView, changed: bool) -> Action {
    if changed {
        Action::Dispatch(HubEvent::QueryChanged(view.query.clone()))
    } else {
        Action::Ignored
    }
}

/// Handle keys while the grid has focus
fn handle_grid_key(view: &mut ShowcaseView, key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        (KeyCode::Esc, _) => Action::Quit,
        (KeyCode::Enter, _) => match view.highlighted() {
            Some(asset) => Action::Dispatch(HubEvent::CardActivated {
                id: asset.id,
                trigger: card_handle(asset.id),
            }),
            None => Action::Ignored,
        },

        // Category chips
        (KeyCode::Tab, _) => view
            .cycle_category(false)
            .map_or(Action::Ignored, |c| Action::Dispatch(HubEvent::CategorySelected(c))),
        (KeyCode::BackTab, _) => view
            .cycle_category(true)
            .map_or(Action::Ignored, |c| Action::Dispatch(HubEvent::CategorySelected(c))),

        // Grid navigation
        (KeyCode::Up, _) => {
            view.cursor_prev();
            Action::Continue
        }
        (KeyCode::Down, _) => {
            view.cursor_next();
            Action::Continue
        }
        (KeyCode::Home, _) => {
            view.cursor_first();
            Action::Continue
        }
        (KeyCode::End, _) => {
            view.cursor_last();
            Action::Continue
        }

        // Query editing
        (KeyCode::Char('u'), KeyModifiers::CONTROL) => {
            let changed = view.query_clear();
            query_changed(view, changed)
        }
        (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
            view.query_push(c);
            query_changed(view, true)
        }
        (KeyCode::Backspace, _) => {
            let changed = view.query_backspace();
            query_changed(view, changed)
        }
        (KeyCode::Delete, _) => {
            let changed = view.query_delete();
            query_changed(view, changed)
        }
        (KeyCode::Left, _) => {
            view.query_cursor_left();
            Action::Continue
        }
        (KeyCode::Right, _) => {
            view.query_cursor_right();
            Action::Continue
        }

        _ => Action::Ignored,
    }
}

/// Handle keys while the modal is mounted
fn handle_modal_key(view: &mut ShowcaseView, key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Up => {
            view.modal_scroll_up(1);
            Action::Continue
        }
        KeyCode::Down => {
            view.modal_scroll_down(1);
            Action::Continue
        }
        KeyCode::PageUp => {
            view.modal_scroll_up(MODAL_PAGE);
            Action::Continue
        }
        KeyCode::PageDown => {
            view.modal_scroll_down(MODAL_PAGE);
            Action::Continue
        }
        KeyCode::Esc => Action::Dispatch(HubEvent::EscapePressed),
        KeyCode::Tab | KeyCode::BackTab => Action::Dispatch(HubEvent::TabPressed {
            shift: key.code == KeyCode::BackTab || key.modifiers.contains(KeyModifiers::SHIFT),
            focusables: view.focusables(),
            current: view.current_focus(),
        }),
        KeyCode::Enter => match view.focused_link() {
            Some(url) => Action::OpenLink(url.to_string()),
            None => Action::Dispatch(HubEvent::CloseRequested),
        },
        _ => Action::Ignored,
    }
}

/// Handle a key press
pub fn handle_key(view: &mut ShowcaseView, key: KeyEvent) -> Action {
    view.status = None;
    if is_ctrl_c(&key) {
        return Action::Quit;
    }
    if view.is_modal_mounted() {
        handle_modal_key(view, key)
    } else {
        handle_grid_key(view, key)
    }
}

/// Handle mouse events
pub fn handle_mouse(view: &mut ShowcaseView, mouse: MouseEvent) -> Action {
    let (column, row) = (mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) if view.is_modal_mounted() => {
            if view.panel_contains(column, row) {
                Action::Dispatch(HubEvent::PanelClicked)
            } else {
                Action::Dispatch(HubEvent::BackdropClicked)
            }
        }
        MouseEventKind::Down(MouseButton::Left) => {
            if let Some(id) = view.card_at(column, row) {
                return Action::Dispatch(HubEvent::CardActivated {
                    id,
                    trigger: card_handle(id),
                });
            }
            view.chip_at(column, row)
                .cloned()
                .map_or(Action::Ignored, |c| Action::Dispatch(HubEvent::CategorySelected(c)))
        }
        MouseEventKind::ScrollUp if view.is_modal_mounted() => {
            view.modal_scroll_up(WHEEL_ROWS);
            Action::Continue
        }
        MouseEventKind::ScrollDown if view.is_modal_mounted() => {
            view.modal_scroll_down(WHEEL_ROWS);
            Action::Continue
        }
        MouseEventKind::ScrollUp => {
            view.cursor_prev();
            Action::Continue
        }
        MouseEventKind::ScrollDown => {
            view.cursor_next();
            Action::Continue
        }
        _ => Action::Ignored,
    }
}

/// Poll for events and handle them
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn poll_and_handle(view: &mut ShowcaseView, timeout: Duration) -> std::io::Result<Action> {
    if !event::poll(timeout)? {
        return Ok(Action::Continue);
    }

    let action = match event::read()? {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(view, key),
        Event::Mouse(mouse) => handle_mouse(view, mouse),
        Event::Resize(_, _) => Action::Continue,
        _ => Action::Ignored,
    };

    Ok(action)
}

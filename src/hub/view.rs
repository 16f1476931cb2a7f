//! View contract
//!
//! A view is an observer of [`HubState`](super::HubState): the driver calls
//! these methods whenever the reducer asks for a redraw or a focus change.
//! Implementations own every concrete UI element and hand out opaque
//! [`FocusHandle`]s for them.

use crate::assets::Asset;
use crate::filter::CategoryFilter;
use crate::modal::FocusHandle;

/// Modal content to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalRender<'a> {
    Hidden,
    Open(&'a Asset),
    /// Still drawn while the exit transition runs
    Closing(&'a Asset),
}

impl<'a> ModalRender<'a> {
    #[must_use]
    pub const fn asset(&self) -> Option<&'a Asset> {
        match self {
            Self::Hidden => None,
            Self::Open(asset) | Self::Closing(asset) => Some(asset),
        }
    }
}

/// Rendering and focus surface driven by the hub
pub trait View {
    /// Replace the card grid with `visible`, in order
    fn render_grid(&mut self, visible: &[&Asset]);

    /// Redraw the category chips, highlighting `active`
    fn render_categories(&mut self, categories: &[CategoryFilter], active: &CategoryFilter);

    /// Show, hide, or fade the modal
    fn render_modal(&mut self, modal: ModalRender<'_>);

    /// Focus the mounted modal's close control
    fn focus_close_control(&mut self);

    /// Focus `target`
    ///
    /// Returns `false` when the element no longer exists or cannot take
    /// focus; the caller treats that as a no-op.
    fn focus(&mut self, target: FocusHandle) -> bool;

    /// Move focus to the next (or previous) focusable inside the modal
    fn step_focus(&mut self, backwards: bool);
}

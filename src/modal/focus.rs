//! Focus handles and keyboard focus containment
//!
//! The view hands the controller an ordered list of focusable handles for
//! the mounted modal. The trap only reasons about the first and last of
//! that list; stepping between interior elements is left to the view.

use std::fmt;

/// Opaque reference to a focusable element owned by the view
///
/// The controller stores and compares handles but never interprets them.
/// A handle may outlive the element it names; focusing such a handle is a
/// no-op on the view side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FocusHandle(u64);

impl FocusHandle {
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for FocusHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// What a Tab press inside the modal should do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabMove {
    /// Move focus to this handle
    Jump(FocusHandle),
    /// Let the view step to the neighbouring element
    Step,
    /// Nothing is focusable
    Ignore,
}

/// Tab-cycle containment over a modal's focusable elements
pub struct FocusTrap;

impl FocusTrap {
    /// Resolve a Tab (or Shift+Tab when `backwards`) press
    ///
    /// Forward from the last element wraps to the first; backward from the
    /// first wraps to the last. Focus outside the set is pulled back in at
    /// the edge the key points to.
    #[must_use]
    pub fn on_tab(
        focusables: &[FocusHandle],
        current: Option<FocusHandle>,
        backwards: bool,
    ) -> TabMove {
        let (Some(&first), Some(&last)) = (focusables.first(), focusables.last()) else {
            return TabMove::Ignore;
        };

        let Some(current) = current.filter(|c| focusables.contains(c)) else {
            return TabMove::Jump(if backwards { last } else { first });
        };

        if backwards && current == first {
            TabMove::Jump(last)
        } else if !backwards && current == last {
            TabMove::Jump(first)
        } else {
            TabMove::Step
        }
    }
}

//! Effect driver
//!
//! [`Hub`] owns the state, the view, and the single pending exit timer. It
//! is single-threaded: every call runs to completion before the next one,
//! and time is passed in explicitly so an event loop (or a test) decides
//! when timers fire.

use super::view::{ModalRender, View};
use super::{Effect, HubEvent, HubState};
use crate::assets::Asset;
use crate::modal::{Generation, ModalView};
use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PendingClose {
    generation: Generation,
    deadline: Instant,
}

/// Runs the reducer and applies its effects to a view
pub struct Hub<V: View> {
    state: HubState,
    view: V,
    pending: Option<PendingClose>,
}

impl<V: View> Hub<V> {
    /// Create a hub and draw the initial state into `view`
    pub fn new(state: HubState, view: V) -> Self {
        let mut hub = Self {
            state,
            view,
            pending: None,
        };
        let effects = hub.state.snapshot();
        hub.apply(effects, Instant::now());
        hub
    }

    #[must_use]
    pub const fn state(&self) -> &HubState {
        &self.state
    }

    #[must_use]
    pub const fn view(&self) -> &V {
        &self.view
    }

    pub const fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// Deadline of the pending exit timer, if one is armed
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.map(|p| p.deadline)
    }

    /// Feed one event through the reducer
    pub fn dispatch(&mut self, event: HubEvent, now: Instant) {
        let effects = self.state.reduce(event);
        self.apply(effects, now);
    }

    /// Fire the exit timer if its deadline has passed
    ///
    /// Returns `true` when a timer fired (whether or not it was stale).
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.pending {
            Some(pending) if pending.deadline <= now => {
                self.pending = None;
                self.dispatch(
                    HubEvent::TimerElapsed {
                        generation: pending.generation,
                    },
                    now,
                );
                true
            }
            _ => false,
        }
    }

    fn apply(&mut self, effects: Vec<Effect>, now: Instant) {
        for effect in effects {
            match effect {
                Effect::RenderGrid(ids) => {
                    let visible: Vec<&Asset> =
                        ids.iter().filter_map(|id| self.state.asset(*id)).collect();
                    self.view.render_grid(&visible);
                }
                Effect::RenderCategories { categories, active } => {
                    self.view.render_categories(&categories, &active);
                }
                Effect::RenderModal(modal) => {
                    let render = match modal {
                        ModalView::Hidden => ModalRender::Hidden,
                        ModalView::Open(id) => {
                            self.state.asset(id).map_or(ModalRender::Hidden, ModalRender::Open)
                        }
                        ModalView::Closing(id) => self
                            .state
                            .asset(id)
                            .map_or(ModalRender::Hidden, ModalRender::Closing),
                    };
                    self.view.render_modal(render);
                }
                Effect::FocusCloseControl => self.view.focus_close_control(),
                Effect::Focus(target) => {
                    if !self.view.focus(target) {
                        tracing::debug!(handle = %target, "focus target unavailable");
                    }
                }
                Effect::StepFocus { backwards } => self.view.step_focus(backwards),
                Effect::RestoreFocus(target) => {
                    if !self.view.focus(target) {
                        tracing::debug!(handle = %target, "return focus target is gone; skipping");
                    }
                }
                Effect::ScheduleClose { generation, after } => {
                    self.pending = Some(PendingClose {
                        generation,
                        deadline: now + after,
                    });
                }
            }
        }
    }
}

//! Selection/modal controller
//!
//! Tracks which asset (if any) is shown in the detail modal and drives the
//! open/close lifecycle.
//!
//! # States
//!
//! ```text
//!            open(A)                close()
//!  Closed ──────────────▶ Open ──────────────▶ Closing
//!    ▲                   ▲   │ open(B)            │
//!    │                   │   └────────┐           │
//!    │                   └── open(B) ─┴───────────┤
//!    └──────────── timer_elapsed(gen) ────────────┘
//! ```
//!
//! The asset stays attached while `Closing` so the view can keep drawing it
//! during the exit transition. Every transition bumps a generation counter;
//! the exit timer carries the generation it was scheduled under and is
//! dropped if the controller has moved on by the time it fires.
//!
//! Effects are returned as data ([`ModalEffect`]) rather than performed, so
//! the controller stays independent of any rendering or timer backend.

mod focus;

pub use focus::{FocusHandle, FocusTrap, TabMove};

use crate::assets::AssetId;
use std::time::Duration;

/// Default exit transition length
pub const DEFAULT_EXIT_DURATION: Duration = Duration::from_millis(300);

/// Monotonic transition counter used to discard stale exit timers
pub type Generation = u64;

/// Lifecycle phase of the modal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalPhase {
    #[default]
    Closed,
    Open,
    Closing,
}

/// What the view should draw for the modal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalView {
    Hidden,
    Open(AssetId),
    Closing(AssetId),
}

/// Side effects requested by a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalEffect {
    /// Redraw the modal
    Show(ModalView),
    /// Move focus to the modal's close control
    FocusCloseControl,
    /// Start the one-shot exit timer
    ScheduleClose {
        generation: Generation,
        after: Duration,
    },
    /// Give focus back to the element that opened the modal, if it still exists
    RestoreFocus(FocusHandle),
    /// Move focus to a specific element inside the modal
    Focus(FocusHandle),
    /// Step focus to the neighbouring element inside the modal
    StepFocus { backwards: bool },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Mounted {
    asset: AssetId,
    return_focus: FocusHandle,
    closing: bool,
}

/// The modal state machine
///
/// Starts `Closed`. `closing` lives inside the mounted record, so "closing
/// with no asset" cannot be represented.
#[derive(Debug, Clone)]
pub struct ModalController {
    mounted: Option<Mounted>,
    generation: Generation,
    exit_duration: Duration,
}

impl Default for ModalController {
    fn default() -> Self {
        Self::new(DEFAULT_EXIT_DURATION)
    }
}

impl ModalController {
    /// Create a closed controller
    ///
    /// `exit_duration` must match the length of the view's exit transition.
    #[must_use]
    pub const fn new(exit_duration: Duration) -> Self {
        Self {
            mounted: None,
            generation: 0,
            exit_duration,
        }
    }

    #[must_use]
    pub const fn phase(&self) -> ModalPhase {
        match self.mounted {
            None => ModalPhase::Closed,
            Some(Mounted { closing: false, .. }) => ModalPhase::Open,
            Some(Mounted { closing: true, .. }) => ModalPhase::Closing,
        }
    }

    /// Asset currently attached to the modal (open or closing)
    #[must_use]
    pub fn open_asset(&self) -> Option<AssetId> {
        self.mounted.map(|m| m.asset)
    }

    #[must_use]
    pub fn is_closing(&self) -> bool {
        self.mounted.is_some_and(|m| m.closing)
    }

    /// Whether the modal is on screen (open or closing)
    #[must_use]
    pub const fn is_mounted(&self) -> bool {
        self.mounted.is_some()
    }

    #[must_use]
    pub fn return_focus(&self) -> Option<FocusHandle> {
        self.mounted.map(|m| m.return_focus)
    }

    #[must_use]
    pub const fn generation(&self) -> Generation {
        self.generation
    }

    #[must_use]
    pub const fn exit_duration(&self) -> Duration {
        self.exit_duration
    }

    #[must_use]
    pub fn view(&self) -> ModalView {
        match self.mounted {
            None => ModalView::Hidden,
            Some(m) if m.closing => ModalView::Closing(m.asset),
            Some(m) => ModalView::Open(m.asset),
        }
    }

    /// Open the modal on `asset`
    ///
    /// Valid from every phase. Opening while open or closing replaces the
    /// asset and the return-focus target immediately, with no exit phase.
    pub fn open(&mut self, asset: AssetId, trigger: FocusHandle) -> Vec<ModalEffect> {
        let previous = self.phase();
        self.generation += 1;
        self.mounted = Some(Mounted {
            asset,
            return_focus: trigger,
            closing: false,
        });
        tracing::debug!(
            asset = %asset,
            generation = self.generation,
            from = ?previous,
            "modal opened"
        );

        vec![
            ModalEffect::Show(ModalView::Open(asset)),
            ModalEffect::FocusCloseControl,
        ]
    }

    /// Begin the exit transition
    ///
    /// Only acts while `Open`; closing an already closing or closed modal
    /// does nothing.
    pub fn close(&mut self) -> Vec<ModalEffect> {
        let Some(mounted) = self.mounted.as_mut().filter(|m| !m.closing) else {
            return Vec::new();
        };

        mounted.closing = true;
        let asset = mounted.asset;
        self.generation += 1;
        tracing::debug!(asset = %asset, generation = self.generation, "modal closing");

        vec![
            ModalEffect::Show(ModalView::Closing(asset)),
            ModalEffect::ScheduleClose {
                generation: self.generation,
                after: self.exit_duration,
            },
        ]
    }

    pub fn escape(&mut self) -> Vec<ModalEffect> {
        self.close()
    }

    pub fn backdrop_click(&mut self) -> Vec<ModalEffect> {
        self.close()
    }

    /// Clicks inside the panel never reach the backdrop
    pub fn panel_click(&mut self) -> Vec<ModalEffect> {
        Vec::new()
    }

    /// Finish the exit transition scheduled under `generation`
    ///
    /// A timer from a superseded generation is ignored.
    pub fn timer_elapsed(&mut self, generation: Generation) -> Vec<ModalEffect> {
        let current = self
            .mounted
            .filter(|m| m.closing && generation == self.generation);
        let Some(mounted) = current else {
            tracing::debug!(
                timer = generation,
                current = self.generation,
                "dropping stale exit timer"
            );
            return Vec::new();
        };

        self.mounted = None;
        self.generation += 1;
        tracing::debug!(asset = %mounted.asset, "modal closed");

        vec![
            ModalEffect::Show(ModalView::Hidden),
            ModalEffect::RestoreFocus(mounted.return_focus),
        ]
    }

    /// Contain Tab navigation inside the mounted modal
    ///
    /// Does nothing while closed.
    pub fn tab(
        &self,
        focusables: &[FocusHandle],
        current: Option<FocusHandle>,
        backwards: bool,
    ) -> Vec<ModalEffect> {
        if !self.is_mounted() {
            return Vec::new();
        }

        match FocusTrap::on_tab(focusables, current, backwards) {
            TabMove::Jump(target) => vec![ModalEffect::Focus(target)],
            TabMove::Step => vec![ModalEffect::StepFocus { backwards }],
            TabMove::Ignore => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: AssetId = AssetId::new(1);
    const B: AssetId = AssetId::new(2);
    const CARD_A: FocusHandle = FocusHandle::new(101);
    const CARD_B: FocusHandle = FocusHandle::new(102);

    fn scheduled_generation(effects: &[ModalEffect]) -> Generation {
        effects
            .iter()
            .find_map(|e| match e {
                ModalEffect::ScheduleClose { generation, .. } => Some(*generation),
                _ => None,
            })
            .expect("close should schedule a timer")
    }

    #[test]
    fn test_initial_state_is_closed() {
        let modal = ModalController::default();
        assert_eq!(modal.phase(), ModalPhase::Closed);
        assert_eq!(modal.open_asset(), None);
        assert!(!modal.is_closing());
        assert_eq!(modal.view(), ModalView::Hidden);
        assert_eq!(modal.exit_duration(), Duration::from_millis(300));
    }

    #[test]
    fn test_open_focuses_close_control() {
        let mut modal = ModalController::default();
        let effects = modal.open(A, CARD_A);

        assert_eq!(modal.phase(), ModalPhase::Open);
        assert_eq!(modal.open_asset(), Some(A));
        assert_eq!(modal.return_focus(), Some(CARD_A));
        assert_eq!(
            effects,
            vec![
                ModalEffect::Show(ModalView::Open(A)),
                ModalEffect::FocusCloseControl
            ]
        );
    }

    #[test]
    fn test_full_lifecycle_restores_focus() {
        let mut modal = ModalController::new(Duration::from_millis(150));
        modal.open(A, CARD_A);

        let effects = modal.close();
        assert_eq!(modal.phase(), ModalPhase::Closing);
        assert_eq!(modal.open_asset(), Some(A));
        assert!(effects.contains(&ModalEffect::ScheduleClose {
            generation: modal.generation(),
            after: Duration::from_millis(150),
        }));

        let effects = modal.timer_elapsed(scheduled_generation(&effects));
        assert_eq!(modal.phase(), ModalPhase::Closed);
        assert_eq!(modal.open_asset(), None);
        assert_eq!(
            effects,
            vec![
                ModalEffect::Show(ModalView::Hidden),
                ModalEffect::RestoreFocus(CARD_A)
            ]
        );
    }

    #[test]
    fn test_reopen_during_closing_ignores_old_timer() {
        let mut modal = ModalController::default();
        modal.open(A, CARD_A);
        let gen_a = scheduled_generation(&modal.close());

        modal.open(B, CARD_B);
        assert_eq!(modal.phase(), ModalPhase::Open);
        assert_eq!(modal.open_asset(), Some(B));

        assert!(modal.timer_elapsed(gen_a).is_empty());
        assert_eq!(modal.phase(), ModalPhase::Open);
        assert_eq!(modal.open_asset(), Some(B));
        assert_eq!(modal.return_focus(), Some(CARD_B));
    }

    #[test]
    fn test_old_timer_ignored_even_after_second_close() {
        let mut modal = ModalController::default();
        modal.open(A, CARD_A);
        let gen_a = scheduled_generation(&modal.close());
        modal.open(B, CARD_B);
        let gen_b = scheduled_generation(&modal.close());

        assert!(modal.timer_elapsed(gen_a).is_empty());
        assert_eq!(modal.phase(), ModalPhase::Closing);

        let effects = modal.timer_elapsed(gen_b);
        assert_eq!(modal.phase(), ModalPhase::Closed);
        assert!(effects.contains(&ModalEffect::RestoreFocus(CARD_B)));
    }

    #[test]
    fn test_open_while_open_replaces_content() {
        let mut modal = ModalController::default();
        modal.open(A, CARD_A);
        let effects = modal.open(B, CARD_B);

        assert_eq!(modal.phase(), ModalPhase::Open);
        assert_eq!(modal.open_asset(), Some(B));
        assert_eq!(modal.return_focus(), Some(CARD_B));
        assert!(!effects.iter().any(|e| matches!(e, ModalEffect::ScheduleClose { .. })));
    }

    #[test]
    fn test_close_is_idempotent_while_closing() {
        let mut modal = ModalController::default();
        modal.open(A, CARD_A);
        let closing_gen = scheduled_generation(&modal.close());

        assert!(modal.close().is_empty());
        assert!(modal.escape().is_empty());
        assert_eq!(modal.generation(), closing_gen);
    }

    #[test]
    fn test_escape_and_backdrop_close() {
        let mut modal = ModalController::default();
        modal.open(A, CARD_A);
        assert!(!modal.escape().is_empty());
        assert!(modal.is_closing());

        let mut modal = ModalController::default();
        modal.open(A, CARD_A);
        assert!(!modal.backdrop_click().is_empty());
        assert!(modal.is_closing());
    }

    #[test]
    fn test_panel_click_does_not_close() {
        let mut modal = ModalController::default();
        modal.open(A, CARD_A);
        assert!(modal.panel_click().is_empty());
        assert_eq!(modal.phase(), ModalPhase::Open);
    }

    #[test]
    fn test_close_and_escape_noop_when_closed() {
        let mut modal = ModalController::default();
        assert!(modal.close().is_empty());
        assert!(modal.escape().is_empty());
        assert!(modal.timer_elapsed(0).is_empty());
        assert_eq!(modal.phase(), ModalPhase::Closed);
    }

    #[test]
    fn test_tab_trap_only_while_mounted() {
        let set = [FocusHandle::new(1), FocusHandle::new(2)];
        let mut modal = ModalController::default();
        assert!(modal.tab(&set, Some(set[1]), false).is_empty());

        modal.open(A, CARD_A);
        assert_eq!(
            modal.tab(&set, Some(set[1]), false),
            vec![ModalEffect::Focus(set[0])]
        );
        assert_eq!(
            modal.tab(&set, Some(set[0]), true),
            vec![ModalEffect::Focus(set[1])]
        );
        assert_eq!(
            modal.tab(&set, Some(set[0]), false),
            vec![ModalEffect::StepFocus { backwards: false }]
        );

        modal.close();
        assert_eq!(
            modal.tab(&set, Some(set[1]), false),
            vec![ModalEffect::Focus(set[0])]
        );
    }

    #[test]
    fn test_closing_implies_open_asset() {
        let mut modal = ModalController::default();
        modal.open(A, CARD_A);
        modal.close();
        assert!(modal.is_closing());
        assert!(modal.open_asset().is_some());
        assert_eq!(modal.view(), ModalView::Closing(A));
    }
}

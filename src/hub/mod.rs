//! Reducer core tying the filter engine and modal controller together
//!
//! [`HubState`] is the whole application state. Every user or timer event
//! goes through [`HubState::reduce`], which mutates the state and returns
//! the [`Effect`]s a view must apply. Nothing in here renders, sleeps, or
//! touches a terminal.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────┐  HubEvent   ┌────────────┐  Effect   ┌──────────┐
//! │   View   │ ──────────▶ │  HubState  │ ────────▶ │ Hub<V>   │
//! │ (events) │             │  reduce()  │           │ (driver) │
//! └──────────┘             └────────────┘           └────┬─────┘
//!       ▲                                                │
//!       └──────────── View::render_* / focus ────────────┘
//! ```

mod driver;
mod view;

pub use driver::Hub;
pub use view::{ModalRender, View};

use crate::assets::{Asset, AssetId};
use crate::filter::{CategoryFilter, FilterState, derive_categories, visible_ids};
use crate::modal::{FocusHandle, Generation, ModalController, ModalEffect, ModalView};
use std::time::Duration;

/// Input events, one per View → Core call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HubEvent {
    /// The search box text changed
    QueryChanged(String),
    /// A category chip was selected
    CategorySelected(CategoryFilter),
    /// A card was clicked or activated with the keyboard
    CardActivated { id: AssetId, trigger: FocusHandle },
    /// The modal's close control was activated
    CloseRequested,
    /// A click landed on the backdrop outside the modal panel
    BackdropClicked,
    /// A click landed inside the modal panel
    PanelClicked,
    EscapePressed,
    /// Tab or Shift+Tab while the modal is mounted
    TabPressed {
        shift: bool,
        focusables: Vec<FocusHandle>,
        current: Option<FocusHandle>,
    },
    /// The exit timer scheduled under `generation` fired
    TimerElapsed { generation: Generation },
}

/// Output effects, one per Core → View call plus timer scheduling
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    RenderGrid(Vec<AssetId>),
    RenderCategories {
        categories: Vec<CategoryFilter>,
        active: CategoryFilter,
    },
    RenderModal(ModalView),
    FocusCloseControl,
    Focus(FocusHandle),
    StepFocus { backwards: bool },
    RestoreFocus(FocusHandle),
    ScheduleClose {
        generation: Generation,
        after: Duration,
    },
}

impl From<ModalEffect> for Effect {
    fn from(effect: ModalEffect) -> Self {
        match effect {
            ModalEffect::Show(view) => Self::RenderModal(view),
            ModalEffect::FocusCloseControl => Self::FocusCloseControl,
            ModalEffect::ScheduleClose { generation, after } => {
                Self::ScheduleClose { generation, after }
            }
            ModalEffect::RestoreFocus(target) => Self::RestoreFocus(target),
            ModalEffect::Focus(target) => Self::Focus(target),
            ModalEffect::StepFocus { backwards } => Self::StepFocus { backwards },
        }
    }
}

fn lift(effects: Vec<ModalEffect>) -> Vec<Effect> {
    effects.into_iter().map(Effect::from).collect()
}

/// Complete showcase state
///
/// Built explicitly from a loaded data set; the asset list and category
/// registry never change afterwards.
#[derive(Debug, Clone)]
pub struct HubState {
    assets: Vec<Asset>,
    categories: Vec<CategoryFilter>,
    filter: FilterState,
    visible: Vec<AssetId>,
    modal: ModalController,
}

impl HubState {
    /// Create the initial state: empty query, `All` category, modal closed
    #[must_use]
    pub fn new(assets: Vec<Asset>, exit_duration: Duration) -> Self {
        Self::with_filter(assets, FilterState::default(), exit_duration)
    }

    /// Create the initial state with a pre-set filter
    #[must_use]
    pub fn with_filter(assets: Vec<Asset>, filter: FilterState, exit_duration: Duration) -> Self {
        let categories = derive_categories(&assets);
        let visible = visible_ids(&assets, &filter.query, &filter.category);
        Self {
            assets,
            categories,
            filter,
            visible,
            modal: ModalController::new(exit_duration),
        }
    }

    #[must_use]
    pub fn assets(&self) -> &[Asset] {
        &self.assets
    }

    #[must_use]
    pub fn asset(&self, id: AssetId) -> Option<&Asset> {
        self.assets.iter().find(|asset| asset.id == id)
    }

    #[must_use]
    pub fn categories(&self) -> &[CategoryFilter] {
        &self.categories
    }

    #[must_use]
    pub const fn filter(&self) -> &FilterState {
        &self.filter
    }

    #[must_use]
    pub fn visible(&self) -> &[AssetId] {
        &self.visible
    }

    /// Visible assets in display order
    pub fn visible_assets(&self) -> impl Iterator<Item = &Asset> {
        self.visible.iter().filter_map(|id| self.asset(*id))
    }

    #[must_use]
    pub const fn modal(&self) -> &ModalController {
        &self.modal
    }

    /// Effects that draw the current state from scratch
    #[must_use]
    pub fn snapshot(&self) -> Vec<Effect> {
        vec![
            self.categories_effect(),
            Effect::RenderGrid(self.visible.clone()),
            Effect::RenderModal(self.modal.view()),
        ]
    }

    fn categories_effect(&self) -> Effect {
        Effect::RenderCategories {
            categories: self.categories.clone(),
            active: self.filter.category.clone(),
        }
    }

    fn refilter(&mut self) -> Effect {
        self.visible = visible_ids(&self.assets, &self.filter.query, &self.filter.category);
        tracing::trace!(
            query = %self.filter.query,
            category = %self.filter.category,
            visible = self.visible.len(),
            "filter recomputed"
        );
        Effect::RenderGrid(self.visible.clone())
    }

    /// Apply one event and return the effects the view must perform
    pub fn reduce(&mut self, event: HubEvent) -> Vec<Effect> {
        match event {
            HubEvent::QueryChanged(query) => {
                self.filter.query = query;
                vec![self.refilter()]
            }
            HubEvent::CategorySelected(category) => {
                self.filter.category = category;
                vec![self.categories_effect(), self.refilter()]
            }
            HubEvent::CardActivated { id, trigger } => {
                if self.asset(id).is_none() {
                    tracing::debug!(asset = %id, "ignoring activation of unknown asset");
                    return Vec::new();
                }
                lift(self.modal.open(id, trigger))
            }
            HubEvent::CloseRequested => lift(self.modal.close()),
            HubEvent::BackdropClicked => lift(self.modal.backdrop_click()),
            HubEvent::PanelClicked => lift(self.modal.panel_click()),
            HubEvent::EscapePressed => lift(self.modal.escape()),
            HubEvent::TabPressed {
                shift,
                focusables,
                current,
            } => lift(self.modal.tab(&focusables, current, shift)),
            HubEvent::TimerElapsed { generation } => lift(self.modal.timer_elapsed(generation)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modal::ModalPhase;
    use crate::testing::sample_assets;

    const CARD: FocusHandle = FocusHandle::new(7);

    fn state() -> HubState {
        HubState::new(sample_assets(), Duration::from_millis(300))
    }

    fn ids(raw: &[u32]) -> Vec<AssetId> {
        raw.iter().copied().map(AssetId::new).collect()
    }

    #[test]
    fn test_initial_state() {
        let hub = state();
        assert_eq!(hub.filter(), &FilterState::default());
        assert_eq!(hub.visible(), ids(&[1, 2, 3]).as_slice());
        assert_eq!(hub.categories()[0], CategoryFilter::All);
        assert_eq!(hub.categories().len(), 4);
        assert_eq!(hub.modal().phase(), ModalPhase::Closed);
    }

    #[test]
    fn test_query_change_rerenders_grid() {
        let mut hub = state();
        let effects = hub.reduce(HubEvent::QueryChanged("fram".into()));
        assert_eq!(effects, vec![Effect::RenderGrid(ids(&[1]))]);

        let effects = hub.reduce(HubEvent::QueryChanged("zzz".into()));
        assert_eq!(effects, vec![Effect::RenderGrid(Vec::new())]);
        assert_eq!(hub.visible_assets().count(), 0);
    }

    #[test]
    fn test_category_select_rerenders_chips_and_grid() {
        let mut hub = state();
        let media = CategoryFilter::parse("media");
        let effects = hub.reduce(HubEvent::CategorySelected(media.clone()));

        assert_eq!(
            effects,
            vec![
                Effect::RenderCategories {
                    categories: hub.categories().to_vec(),
                    active: media,
                },
                Effect::RenderGrid(ids(&[2])),
            ]
        );
    }

    #[test]
    fn test_unknown_category_yields_empty_grid() {
        let mut hub = state();
        hub.reduce(HubEvent::CategorySelected(CategoryFilter::parse("podcasts")));
        assert!(hub.visible().is_empty());
    }

    #[test]
    fn test_unknown_card_is_ignored() {
        let mut hub = state();
        let effects = hub.reduce(HubEvent::CardActivated {
            id: AssetId::new(999),
            trigger: CARD,
        });
        assert!(effects.is_empty());
        assert_eq!(hub.modal().phase(), ModalPhase::Closed);
    }

    #[test]
    fn test_card_activation_opens_modal() {
        let mut hub = state();
        let effects = hub.reduce(HubEvent::CardActivated {
            id: AssetId::new(2),
            trigger: CARD,
        });
        assert_eq!(
            effects,
            vec![
                Effect::RenderModal(ModalView::Open(AssetId::new(2))),
                Effect::FocusCloseControl,
            ]
        );
    }

    #[test]
    fn test_close_schedules_timer_then_restores_focus() {
        let mut hub = state();
        hub.reduce(HubEvent::CardActivated {
            id: AssetId::new(1),
            trigger: CARD,
        });
        let effects = hub.reduce(HubEvent::CloseRequested);
        let generation = match effects.as_slice() {
            [
                Effect::RenderModal(ModalView::Closing(_)),
                Effect::ScheduleClose { generation, after },
            ] => {
                assert_eq!(*after, Duration::from_millis(300));
                *generation
            }
            other => panic!("unexpected effects: {other:?}"),
        };

        let effects = hub.reduce(HubEvent::TimerElapsed { generation });
        assert_eq!(
            effects,
            vec![
                Effect::RenderModal(ModalView::Hidden),
                Effect::RestoreFocus(CARD),
            ]
        );
    }

    #[test]
    fn test_panel_click_is_suppressed() {
        let mut hub = state();
        hub.reduce(HubEvent::CardActivated {
            id: AssetId::new(1),
            trigger: CARD,
        });
        assert!(hub.reduce(HubEvent::PanelClicked).is_empty());
        assert!(!hub.reduce(HubEvent::BackdropClicked).is_empty());
        assert_eq!(hub.modal().phase(), ModalPhase::Closing);
    }

    #[test]
    fn test_filter_keeps_working_while_modal_open() {
        let mut hub = state();
        hub.reduce(HubEvent::CardActivated {
            id: AssetId::new(1),
            trigger: CARD,
        });
        hub.reduce(HubEvent::QueryChanged("media".into()));
        assert_eq!(hub.visible(), ids(&[2]).as_slice());
        assert_eq!(hub.modal().open_asset(), Some(AssetId::new(1)));
    }

    #[test]
    fn test_with_filter_applies_initial_query() {
        let hub = HubState::with_filter(
            sample_assets(),
            FilterState::new("COLLAB", CategoryFilter::All),
            Duration::from_millis(300),
        );
        assert_eq!(hub.visible(), ids(&[3]).as_slice());
    }

    #[test]
    fn test_snapshot_draws_everything() {
        let hub = state();
        let effects = hub.snapshot();
        assert_eq!(effects.len(), 3);
        assert!(matches!(effects[0], Effect::RenderCategories { .. }));
        assert_eq!(effects[1], Effect::RenderGrid(ids(&[1, 2, 3])));
        assert_eq!(effects[2], Effect::RenderModal(ModalView::Hidden));
    }
}

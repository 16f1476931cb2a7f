//! Testing utilities for assethub
//!
//! Fixture assets and a [`RecordingView`] that captures every call the hub
//! makes, so reducer and driver tests can assert on what would have been
//! drawn without a terminal.
//!
//! Only available when compiled with `cfg(test)`.

use crate::assets::{Asset, AssetId, ChildSection, DetailEntry};
use crate::filter::CategoryFilter;
use crate::hub::{ModalRender, View};
use crate::modal::FocusHandle;

/// Three assets mirroring the showcase: Frameworks, Media, Collaborations
///
/// Media carries one link entry; Frameworks uses child sections.
#[must_use]
pub fn sample_assets() -> Vec<Asset> {
    vec![
        Asset::new(
            1,
            "Frameworks",
            "Proprietary models for consulting and coaching engagements.",
            "frameworks",
        )
        .with_sections(vec![
            ChildSection::new("Consulting", vec!["PPTG".into(), "Giant".into()]),
            ChildSection::new("Coaching", vec!["Mcode".into()]),
        ]),
        Asset::new(
            2,
            "Media",
            "Our presence and contributions in leading publications and forums.",
            "media",
        )
        .with_details(vec![
            DetailEntry::text("Ted X"),
            DetailEntry::link("Economic Times", "https://economictimes.indiatimes.com/"),
        ]),
        Asset::new(
            3,
            "Collaborations",
            "Key partnerships that enhance our service delivery and reach.",
            "collaborations",
        )
        .with_details(vec![DetailEntry::text("Zoho"), DetailEntry::text("Zyxware")]),
    ]
}

/// A single call observed by [`RecordingView`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewCall {
    Grid(Vec<u32>),
    Categories(Vec<String>, String),
    /// Modal asset id (if shown) and whether it is closing
    Modal(Option<u32>, bool),
    FocusClose,
    Focus(FocusHandle),
    Step(bool),
}

/// View that records calls and keeps a minimal model of what is on screen
#[derive(Debug, Default)]
pub struct RecordingView {
    pub calls: Vec<ViewCall>,
    pub grid: Vec<u32>,
    pub active_category: Option<String>,
    pub modal: Option<(u32, bool)>,
    pub modal_links: usize,
    pub focused: Option<FocusHandle>,
    /// Handles whose elements have been removed from the screen
    pub removed: Vec<FocusHandle>,
}

impl RecordingView {
    pub const CLOSE: FocusHandle = FocusHandle::new(0);

    #[must_use]
    pub const fn card_handle(id: AssetId) -> FocusHandle {
        FocusHandle::new(1000 + id.get() as u64)
    }

    #[must_use]
    pub const fn link_handle(index: usize) -> FocusHandle {
        FocusHandle::new(1 + index as u64)
    }

    /// Close control followed by each link, while the modal is mounted
    #[must_use]
    pub fn focusables(&self) -> Vec<FocusHandle> {
        if self.modal.is_none() {
            return Vec::new();
        }
        std::iter::once(Self::CLOSE)
            .chain((0..self.modal_links).map(Self::link_handle))
            .collect()
    }

    fn exists(&self, target: FocusHandle) -> bool {
        if self.removed.contains(&target) {
            return false;
        }
        if target.raw() >= 1000 {
            self.grid.iter().any(|id| u64::from(*id) + 1000 == target.raw())
        } else {
            self.focusables().contains(&target)
        }
    }
}

impl View for RecordingView {
    fn render_grid(&mut self, visible: &[&Asset]) {
        self.grid = visible.iter().map(|a| a.id.get()).collect();
        self.calls.push(ViewCall::Grid(self.grid.clone()));
    }

    fn render_categories(&mut self, categories: &[CategoryFilter], active: &CategoryFilter) {
        self.active_category = Some(active.to_string());
        self.calls.push(ViewCall::Categories(
            categories.iter().map(ToString::to_string).collect(),
            active.to_string(),
        ));
    }

    fn render_modal(&mut self, modal: ModalRender<'_>) {
        self.modal = match modal {
            ModalRender::Hidden => None,
            ModalRender::Open(asset) => Some((asset.id.get(), false)),
            ModalRender::Closing(asset) => Some((asset.id.get(), true)),
        };
        self.modal_links = modal.asset().map_or(0, |a| a.body.links().count());
        self.calls.push(ViewCall::Modal(
            self.modal.map(|(id, _)| id),
            self.modal.is_some_and(|(_, closing)| closing),
        ));
    }

    fn focus_close_control(&mut self) {
        self.focused = Some(Self::CLOSE);
        self.calls.push(ViewCall::FocusClose);
    }

    fn focus(&mut self, target: FocusHandle) -> bool {
        self.calls.push(ViewCall::Focus(target));
        if self.exists(target) {
            self.focused = Some(target);
            true
        } else {
            false
        }
    }

    fn step_focus(&mut self, backwards: bool) {
        self.calls.push(ViewCall::Step(backwards));
        let set = self.focusables();
        let Some(pos) = self.focused.and_then(|f| set.iter().position(|h| *h == f)) else {
            return;
        };
        let next = if backwards {
            pos.checked_sub(1)
        } else {
            Some(pos + 1).filter(|p| *p < set.len())
        };
        if let Some(next) = next {
            self.focused = Some(set[next]);
        }
    }
}

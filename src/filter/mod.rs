//! Filter engine for the visible asset subset
//!
//! Visibility is the conjunction of two tests:
//!
//! - **Category**: the active filter is `All`, or it names the asset's category exactly
//! - **Search**: the case-folded query is empty, or it occurs in the case-folded
//!   title or description
//!
//! Detail entries and child sections are never searched. The output keeps
//! the input order; nothing is ranked or re-sorted.
//!
//! # Examples
//!
//! ```
//! use assethub::assets::Asset;
//! use assethub::filter::{CategoryFilter, compute_visible};
//!
//! let assets = vec![
//!     Asset::new(1, "Frameworks", "Models", "frameworks"),
//!     Asset::new(2, "Media", "Press", "media"),
//! ];
//!
//! let visible = compute_visible(&assets, "FRAM", &CategoryFilter::All);
//! assert_eq!(visible.len(), 1);
//! assert_eq!(visible[0].title, "Frameworks");
//! ```

mod categories;

pub use categories::derive_categories;

use crate::assets::{Asset, AssetId, Category};
use std::fmt;

/// Label used for the wildcard category
pub const ALL_LABEL: &str = "All";

/// Active category selection
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    /// Synthetic wildcard matching every asset
    #[default]
    All,
    /// Exact match on a single category tag
    Only(Category),
}

impl CategoryFilter {
    /// Parse a user-supplied category name
    ///
    /// `"All"` (any casing) selects the wildcard; anything else is taken verbatim.
    #[must_use]
    pub fn parse(name: &str) -> Self {
        if name.eq_ignore_ascii_case(ALL_LABEL) {
            Self::All
        } else {
            Self::Only(Category::new(name))
        }
    }

    /// Whether an asset in `category` passes this filter
    #[must_use]
    pub fn matches(&self, category: &Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == category,
        }
    }

    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::All => ALL_LABEL,
            Self::Only(category) => category.as_str(),
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Case-folded search query
///
/// Whitespace is significant: `" "` only matches text containing a space.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchNeedle(String);

impl SearchNeedle {
    #[must_use]
    pub fn new(query: &str) -> Self {
        Self(query.to_lowercase())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether the asset's title or description contains the needle
    #[must_use]
    pub fn matches(&self, asset: &Asset) -> bool {
        self.is_empty()
            || asset.title.to_lowercase().contains(&self.0)
            || asset.description.to_lowercase().contains(&self.0)
    }
}

/// Current search query and category selection
///
/// Resets to an empty query and the `All` category on every start.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    pub query: String,
    pub category: CategoryFilter,
}

impl FilterState {
    #[must_use]
    pub fn new(query: impl Into<String>, category: CategoryFilter) -> Self {
        Self {
            query: query.into(),
            category,
        }
    }

    /// Apply this filter to `assets`
    #[must_use]
    pub fn apply<'a>(&self, assets: &'a [Asset]) -> Vec<&'a Asset> {
        compute_visible(assets, &self.query, &self.category)
    }
}

/// Iterator adapter applying the visibility test to any stream of assets
pub trait AssetFilterExt<'a>: Iterator<Item = &'a Asset> + Sized {
    /// Keep only the assets visible under `query` and `category`
    fn matching(self, query: &str, category: &CategoryFilter) -> impl Iterator<Item = &'a Asset> {
        let needle = SearchNeedle::new(query);
        let category = category.clone();
        self.filter(move |asset| category.matches(&asset.category) && needle.matches(asset))
    }
}

impl<'a, I: Iterator<Item = &'a Asset>> AssetFilterExt<'a> for I {}

/// Derive the visible subset of `assets`
///
/// Pure and order-preserving: the result is a subsequence of the input.
#[must_use]
pub fn compute_visible<'a>(
    assets: &'a [Asset],
    query: &str,
    category: &CategoryFilter,
) -> Vec<&'a Asset> {
    assets.iter().matching(query, category).collect()
}

/// Same as [`compute_visible`], returning ids only
#[must_use]
pub fn visible_ids(assets: &[Asset], query: &str, category: &CategoryFilter) -> Vec<AssetId> {
    compute_visible(assets, query, category)
        .into_iter()
        .map(|asset| asset.id)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::sample_assets;

    fn titles(visible: &[&Asset]) -> Vec<String> {
        visible.iter().map(|a| a.title.clone()).collect()
    }

    #[test]
    fn test_empty_query_all_is_identity() {
        let assets = sample_assets();
        let visible = compute_visible(&assets, "", &CategoryFilter::All);
        assert_eq!(visible.len(), assets.len());
        assert!(visible.iter().zip(&assets).all(|(v, a)| *v == a));
    }

    #[test]
    fn test_prefix_query() {
        let assets = sample_assets();
        let visible = compute_visible(&assets, "fram", &CategoryFilter::All);
        assert_eq!(titles(&visible), vec!["Frameworks"]);
    }

    #[test]
    fn test_category_only() {
        let assets = sample_assets();
        let visible = compute_visible(&assets, "", &CategoryFilter::parse("media"));
        assert_eq!(titles(&visible), vec!["Media"]);
    }

    #[test]
    fn test_no_match_is_empty() {
        let assets = sample_assets();
        assert!(compute_visible(&assets, "zzz", &CategoryFilter::All).is_empty());
    }

    #[test]
    fn test_case_insensitive() {
        let assets = sample_assets();
        let upper = compute_visible(&assets, "MEDIA", &CategoryFilter::All);
        let lower = compute_visible(&assets, "media", &CategoryFilter::All);
        assert_eq!(upper, lower);
        assert!(!upper.is_empty());
    }

    #[test]
    fn test_description_is_searched() {
        let assets = sample_assets();
        let visible = compute_visible(&assets, "PARTNERSHIPS", &CategoryFilter::All);
        assert_eq!(titles(&visible), vec!["Collaborations"]);
    }

    #[test]
    fn test_details_are_not_searched() {
        let assets = sample_assets();
        // "Zoho" only appears in Collaborations' detail entries
        assert!(compute_visible(&assets, "zoho", &CategoryFilter::All).is_empty());
    }

    #[test]
    fn test_whitespace_query_is_literal() {
        let assets = vec![
            Asset::new(1, "Industry Reports", "x", "reports"),
            Asset::new(2, "Media", "x", "media"),
        ];
        let visible = compute_visible(&assets, " ", &CategoryFilter::All);
        assert_eq!(titles(&visible), vec!["Industry Reports"]);
    }

    #[test]
    fn test_category_and_query_intersect() {
        let assets = vec![
            Asset::new(1, "Alpha", "shared", "a"),
            Asset::new(2, "Beta", "shared", "b"),
            Asset::new(3, "Gamma", "other", "a"),
        ];
        let visible = compute_visible(&assets, "shared", &CategoryFilter::parse("a"));
        assert_eq!(titles(&visible), vec!["Alpha"]);
    }

    #[test]
    fn test_category_is_exact_match() {
        let assets = sample_assets();
        assert!(compute_visible(&assets, "", &CategoryFilter::parse("Media")).is_empty());
        assert!(compute_visible(&assets, "", &CategoryFilter::parse("med")).is_empty());
    }

    #[test]
    fn test_output_preserves_order() {
        let assets = vec![
            Asset::new(3, "c item", "", "x"),
            Asset::new(1, "a item", "", "x"),
            Asset::new(2, "b other", "", "x"),
            Asset::new(4, "d item", "", "x"),
        ];
        let ids: Vec<u32> = visible_ids(&assets, "item", &CategoryFilter::All)
            .into_iter()
            .map(AssetId::get)
            .collect();
        assert_eq!(ids, vec![3, 1, 4]);
    }

    #[test]
    fn test_empty_data_set() {
        assert!(compute_visible(&[], "anything", &CategoryFilter::All).is_empty());
    }

    #[test]
    fn test_parse_all_label() {
        assert_eq!(CategoryFilter::parse("All"), CategoryFilter::All);
        assert_eq!(CategoryFilter::parse("all"), CategoryFilter::All);
        assert_eq!(CategoryFilter::All.to_string(), "All");
        assert_eq!(CategoryFilter::parse("media").to_string(), "media");
    }

    #[test]
    fn test_filter_state_default_and_apply() {
        let state = FilterState::default();
        assert!(state.query.is_empty());
        assert_eq!(state.category, CategoryFilter::All);

        let assets = sample_assets();
        let state = FilterState::new("collab", CategoryFilter::All);
        assert_eq!(titles(&state.apply(&assets)), vec!["Collaborations"]);
    }

    #[test]
    fn test_matching_adapter_on_any_iterator() {
        let assets = sample_assets();
        let media = CategoryFilter::parse("media");
        let found: Vec<_> = assets.iter().rev().matching("", &media).map(|a| a.id.get()).collect();
        assert_eq!(found, vec![2]);

        let all = CategoryFilter::All;
        let count = assets.iter().matching("key", &all).count();
        assert_eq!(count, 1);
    }
}

//! Category registry

use super::CategoryFilter;
use crate::assets::Asset;
use std::collections::HashSet;

/// Derive the category list shown as filter chips
///
/// The first element is always [`CategoryFilter::All`]; the remaining
/// categories follow in first-seen order, each exactly once.
#[must_use]
pub fn derive_categories(assets: &[Asset]) -> Vec<CategoryFilter> {
    let mut seen = HashSet::new();
    let mut categories = vec![CategoryFilter::All];

    for asset in assets {
        if seen.insert(&asset.category) {
            categories.push(CategoryFilter::Only(asset.category.clone()));
        }
    }

    categories
}

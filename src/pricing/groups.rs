//! Category Groups
//!
//! Per-pass partitioning of cart lines by eligible category. Groups hold
//! keys, not item references, so the assignment stage can mutate the cart
//! after grouping.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::{
    cart::{Cart, LineItemKey},
    catalog::Catalog,
    categories::EligibleCategories,
};

/// Cart lines sharing one eligible category, in cart insertion order.
#[derive(Debug)]
pub struct CategoryGroup<'s> {
    slug: &'s str,
    items: SmallVec<[LineItemKey; 10]>,
}

impl CategoryGroup<'_> {
    /// The category slug this group pairs within.
    pub fn slug(&self) -> &str {
        self.slug
    }

    /// Keys of the member lines, in cart insertion order.
    pub fn items(&self) -> &[LineItemKey] {
        &self.items
    }

    /// Number of member lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the group has no member lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Partition the cart's lines by eligible category.
///
/// Lines classify independently; a line matching no configured category
/// appears in no group, so pairing can never reach across categories or pull
/// in unrelated items. Groups come back in configured-category order, and
/// groups with fewer than two lines are dropped; nothing to pair.
pub fn group_by_category<'s>(
    cart: &Cart<'_>,
    catalog: &Catalog<'_>,
    eligible: &'s EligibleCategories,
) -> SmallVec<[CategoryGroup<'s>; 4]> {
    let mut by_slug: FxHashMap<&str, SmallVec<[LineItemKey; 10]>> = FxHashMap::default();

    for (key, item) in cart.iter() {
        if let Some(slug) = catalog.classify(eligible, item.product()) {
            by_slug.entry(slug).or_default().push(key);
        }
    }

    eligible
        .iter()
        .filter_map(|slug| {
            let items = by_slug.remove(slug)?;

            (items.len() >= 2).then_some(CategoryGroup { slug, items })
        })
        .collect()
}

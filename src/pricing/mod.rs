//! BOGO Pricing
//!
//! The buy-one-get-one-free engine. Every pass is a full recompute over the
//! cart: reset, group, rank, pair. Nothing is carried over between passes,
//! which is what makes the pass safe to run on every recalculation.

use tracing::debug;

use crate::{
    cart::Cart,
    catalog::{Catalog, ProductKey},
    categories::EligibleCategories,
};

pub mod groups;
pub mod units;

/// The BOGO pricing engine.
///
/// Holds the eligible-category configuration and recomputes the pairing from
/// scratch on every pass.
#[derive(Debug, Clone, Default)]
pub struct BogoEngine {
    eligible: EligibleCategories,
}

impl BogoEngine {
    /// Create an engine over the given eligible-category list.
    #[must_use]
    pub fn new(eligible: EligibleCategories) -> Self {
        Self { eligible }
    }

    /// The eligible-category list the engine was built with.
    pub fn eligible(&self) -> &EligibleCategories {
        &self.eligible
    }

    /// Whether a product (variation-aware) sits in a BOGO category.
    pub fn is_eligible(&self, catalog: &Catalog<'_>, product: ProductKey) -> bool {
        catalog.classify(&self.eligible, product).is_some()
    }

    /// Recompute BOGO pricing for the whole cart.
    ///
    /// This is the host's before-totals recalculation hook. Each pass:
    ///
    /// 1. resets every line to its regular price with the free flag cleared,
    ///    so nothing from a previous pass survives;
    /// 2. groups lines by eligible category (cart order within a group);
    /// 3. expands each group into per-quantity units ranked ascending by
    ///    regular price;
    /// 4. pairs units two at a time and marks the cheaper member of each
    ///    pair free: `floor(units / 2)` free units per group, the odd
    ///    remainder untouched.
    ///
    /// Running the pass twice over an unchanged cart changes nothing the
    /// second time.
    ///
    /// A line whose quantity spans more than one pair outcome still carries a
    /// single free flag: one free unit zeroes the whole line. The
    /// unit-separated add-to-cart path keeps eligible lines at quantity one
    /// exactly so this cannot bite, but carts built by other paths may hit
    /// it; see DESIGN.md before changing the semantics.
    pub fn reprice(&self, cart: &mut Cart<'_>, catalog: &Catalog<'_>) {
        for item in cart.items_mut() {
            item.reset();
        }

        let groups = groups::group_by_category(cart, catalog, &self.eligible);

        for group in &groups {
            let ranked = units::expand_and_rank(cart, group);

            if ranked.len() < 2 {
                continue;
            }

            let bundle_count = ranked.len() / 2;

            debug!(
                category = group.slug(),
                lines = group.len(),
                units = ranked.len(),
                bundles = bundle_count,
                "assigning bogo pairs"
            );

            // Ascending order means the cheaper member of the i-th pair sits
            // at the even index; the odd tail unit never lands on one.
            for unit in ranked.iter().step_by(2).take(bundle_count) {
                if let Some(item) = cart.get_mut(unit.line()) {
                    item.mark_free();
                }
            }
        }
    }
}

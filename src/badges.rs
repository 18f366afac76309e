//! Badges
//!
//! View models for the storefront's promotional badges. The host renders
//! them; this crate only decides which badge, if any, a product or cart row
//! gets.

use crate::{
    cart::{Cart, LineItemKey},
    catalog::{Catalog, ProductKey},
    pricing::BogoEngine,
};

/// Promotional badge shown next to a product or cart line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Badge {
    /// The line was made free by the current pairing.
    Free,

    /// The product sits in a BOGO-eligible category.
    Bogo,
}

impl Badge {
    /// Display label for the badge.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Badge::Free => "FREE",
            Badge::Bogo => "BOGO",
        }
    }
}

/// Badge for a cart row: a free line beats a merely eligible one.
pub fn cart_badge(
    engine: &BogoEngine,
    cart: &Cart<'_>,
    catalog: &Catalog<'_>,
    key: LineItemKey,
) -> Option<Badge> {
    let item = cart.get(key)?;

    if item.is_bogo_free() {
        Some(Badge::Free)
    } else if engine.is_eligible(catalog, item.product()) {
        Some(Badge::Bogo)
    } else {
        None
    }
}

/// Badge for a shop or archive tile, variation-aware.
pub fn shop_badge(
    engine: &BogoEngine,
    catalog: &Catalog<'_>,
    product: ProductKey,
) -> Option<Badge> {
    engine.is_eligible(catalog, product).then_some(Badge::Bogo)
}

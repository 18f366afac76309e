//! Unit Expansion & Ranking
//!
//! A pairing pass works on units, not lines: each line expands into one
//! record per quantity unit so a quantity-3 line competes for free slots
//! three times.

use smallvec::SmallVec;

use crate::cart::{Cart, LineItemKey};

use super::groups::CategoryGroup;

/// One quantity unit of a cart line, priced in minor units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Unit {
    line: LineItemKey,
    price_minor: i64,
}

impl Unit {
    /// Key of the line this unit came from.
    pub fn line(&self) -> LineItemKey {
        self.line
    }

    /// Regular unit price in minor units.
    pub fn price_minor(&self) -> i64 {
        self.price_minor
    }
}

/// Expand a group's lines into per-quantity units, ranked ascending by price.
///
/// Units carry the **regular** price, never the effective price: otherwise a
/// line zeroed by the previous pass would rank as free stock forever. The
/// sort is stable, so equal prices keep cart insertion order.
pub fn expand_and_rank(cart: &Cart<'_>, group: &CategoryGroup<'_>) -> SmallVec<[Unit; 10]> {
    let mut units: SmallVec<[Unit; 10]> = SmallVec::new();

    for key in group.items() {
        let Some(item) = cart.get(*key) else {
            continue;
        };

        let price_minor = item.regular_price().to_minor_units();

        for _ in 0..item.quantity() {
            units.push(Unit {
                line: *key,
                price_minor,
            });
        }
    }

    units.sort_by_key(Unit::price_minor);

    units
}

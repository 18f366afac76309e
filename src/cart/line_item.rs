//! Cart Line Items

use rusty_money::{Money, iso::Currency};

use crate::catalog::ProductKey;

/// A single cart entry.
///
/// The effective price always equals the regular price unless the line is
/// flagged free, in which case it is exactly zero. Price and flag are only
/// mutated together through [`reset`](LineItem::reset) and
/// [`mark_free`](LineItem::mark_free), so the pair cannot drift apart.
#[derive(Debug, Clone, PartialEq)]
pub struct LineItem<'a> {
    product: ProductKey,
    quantity: u32,
    regular_price: Money<'a, Currency>,
    price: Money<'a, Currency>,
    bogo_free: bool,
    unit_tag: Option<u64>,
}

impl<'a> LineItem<'a> {
    pub(crate) fn new(
        product: ProductKey,
        quantity: u32,
        regular_price: Money<'a, Currency>,
        unit_tag: Option<u64>,
    ) -> Self {
        Self {
            product,
            quantity,
            regular_price,
            price: regular_price,
            bogo_free: false,
            unit_tag,
        }
    }

    /// The product this line holds.
    pub fn product(&self) -> ProductKey {
        self.product
    }

    /// Number of units in this line.
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Regular (list) unit price.
    pub fn regular_price(&self) -> &Money<'a, Currency> {
        &self.regular_price
    }

    /// Current effective unit price.
    pub fn price(&self) -> &Money<'a, Currency> {
        &self.price
    }

    /// Whether the current pairing made this line free.
    pub fn is_bogo_free(&self) -> bool {
        self.bogo_free
    }

    /// Tag keeping unit-separated lines from merging, when present.
    pub fn unit_tag(&self) -> Option<u64> {
        self.unit_tag
    }

    /// Effective price across the line's quantity.
    pub fn line_total(&self) -> Money<'a, Currency> {
        self.extend(&self.price)
    }

    /// Regular price across the line's quantity.
    pub fn line_subtotal(&self) -> Money<'a, Currency> {
        self.extend(&self.regular_price)
    }

    pub(crate) fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity;
    }

    pub(crate) fn merge_quantity(&mut self, additional: u32) {
        self.quantity = self.quantity.saturating_add(additional);
    }

    /// Restore the regular price and clear the free flag.
    pub(crate) fn reset(&mut self) {
        self.price = self.regular_price;
        self.bogo_free = false;
    }

    /// Zero the effective price and set the free flag.
    pub(crate) fn mark_free(&mut self) {
        self.price = Money::from_minor(0, self.price.currency());
        self.bogo_free = true;
    }

    fn extend(&self, unit: &Money<'a, Currency>) -> Money<'a, Currency> {
        Money::from_minor(
            unit.to_minor_units().saturating_mul(i64::from(self.quantity)),
            unit.currency(),
        )
    }
}

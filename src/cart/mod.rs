//! Cart
//!
//! The in-memory cart the pricing engine operates on: line items keyed by a
//! stable per-entry key, iterated in insertion order.

use rusty_money::{Money, MoneyError, iso::Currency};
use slotmap::{SlotMap, new_key_type};
use thiserror::Error;

use crate::catalog::ProductKey;

pub mod line_item;

pub use line_item::LineItem;

new_key_type! {
    /// Line Item Key
    pub struct LineItemKey;
}

/// Errors related to cart mutation or totals.
#[derive(Debug, Error, PartialEq)]
pub enum CartError {
    /// A price's currency differs from the cart currency (price currency, cart currency).
    #[error("price has currency {0}, but cart has currency {1}")]
    CurrencyMismatch(&'static str, &'static str),

    /// A line item was not found in the cart.
    #[error("line item not found")]
    ItemNotFound,

    /// The product was not found in the catalog.
    #[error("product not found")]
    UnknownProduct,

    /// Quantity edits are locked while the line sits in an active BOGO offer.
    #[error("this product quantity cannot be changed due to an active BOGO offer")]
    QuantityLocked,

    /// A line item must hold at least one unit.
    #[error("quantity must be at least 1")]
    ZeroQuantity,

    /// Wrapped money arithmetic error from totals.
    #[error(transparent)]
    Money(#[from] MoneyError),
}

/// Cart
#[derive(Debug)]
pub struct Cart<'a> {
    items: SlotMap<LineItemKey, LineItem<'a>>,
    order: Vec<LineItemKey>,
    currency: &'static Currency,
    next_unit_tag: u64,
}

impl<'a> Cart<'a> {
    /// Create an empty cart in the given currency.
    #[must_use]
    pub fn new(currency: &'static Currency) -> Self {
        Cart {
            items: SlotMap::with_key(),
            order: Vec::new(),
            currency,
            next_unit_tag: 0,
        }
    }

    /// Add a line for a product, merging into an existing untagged line for
    /// the same product.
    ///
    /// # Errors
    ///
    /// - [`CartError::ZeroQuantity`]: the quantity was zero.
    /// - [`CartError::CurrencyMismatch`]: the price is not in the cart currency.
    pub fn add_line(
        &mut self,
        product: ProductKey,
        quantity: u32,
        regular_price: Money<'a, Currency>,
    ) -> Result<LineItemKey, CartError> {
        self.check(quantity, &regular_price)?;

        let merge_target = self.order.iter().copied().find(|key| {
            self.items
                .get(*key)
                .is_some_and(|item| item.product() == product && item.unit_tag().is_none())
        });

        if let Some(key) = merge_target {
            if let Some(item) = self.items.get_mut(key) {
                item.merge_quantity(quantity);
            }

            return Ok(key);
        }

        Ok(self.push(LineItem::new(product, quantity, regular_price, None)))
    }

    /// Add a single-unit line that never merges, for the unit-separated
    /// add-to-cart path. Each call gets a fresh tag.
    ///
    /// # Errors
    ///
    /// Returns a [`CartError::CurrencyMismatch`] if the price is not in the
    /// cart currency.
    pub fn add_unit(
        &mut self,
        product: ProductKey,
        regular_price: Money<'a, Currency>,
    ) -> Result<LineItemKey, CartError> {
        self.check(1, &regular_price)?;

        self.next_unit_tag += 1;
        let tag = self.next_unit_tag;

        Ok(self.push(LineItem::new(product, 1, regular_price, Some(tag))))
    }

    /// Remove a line from the cart.
    pub fn remove(&mut self, key: LineItemKey) -> Option<LineItem<'a>> {
        let removed = self.items.remove(key);

        if removed.is_some() {
            self.order.retain(|existing| *existing != key);
        }

        removed
    }

    /// Get a line item by key.
    pub fn get(&self, key: LineItemKey) -> Option<&LineItem<'a>> {
        self.items.get(key)
    }

    pub(crate) fn get_mut(&mut self, key: LineItemKey) -> Option<&mut LineItem<'a>> {
        self.items.get_mut(key)
    }

    pub(crate) fn set_quantity(
        &mut self,
        key: LineItemKey,
        quantity: u32,
    ) -> Result<(), CartError> {
        if quantity == 0 {
            return Err(CartError::ZeroQuantity);
        }

        let item = self.items.get_mut(key).ok_or(CartError::ItemNotFound)?;
        item.set_quantity(quantity);

        Ok(())
    }

    /// Iterate over line items in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (LineItemKey, &LineItem<'a>)> {
        self.order
            .iter()
            .filter_map(|key| self.items.get(*key).map(|item| (*key, item)))
    }

    pub(crate) fn items_mut(&mut self) -> impl Iterator<Item = &mut LineItem<'a>> {
        self.items.values_mut()
    }

    /// Get the number of lines in the cart.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the cart is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get the currency of the cart.
    #[must_use]
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }

    /// Cart total at regular prices, before any pairing.
    ///
    /// # Errors
    ///
    /// Returns a [`MoneyError`] if money arithmetic fails.
    pub fn subtotal(&self) -> Result<Money<'a, Currency>, MoneyError> {
        self.sum(LineItem::line_subtotal)
    }

    /// Cart total at effective prices, after the current pairing.
    ///
    /// # Errors
    ///
    /// Returns a [`MoneyError`] if money arithmetic fails.
    pub fn total(&self) -> Result<Money<'a, Currency>, MoneyError> {
        self.sum(LineItem::line_total)
    }

    fn sum(
        &self,
        line_value: impl Fn(&LineItem<'a>) -> Money<'a, Currency>,
    ) -> Result<Money<'a, Currency>, MoneyError> {
        self.iter()
            .try_fold(Money::from_minor(0, self.currency), |acc, (_, item)| {
                acc.add(line_value(item))
            })
    }

    fn check(&self, quantity: u32, price: &Money<'a, Currency>) -> Result<(), CartError> {
        if quantity == 0 {
            return Err(CartError::ZeroQuantity);
        }

        let price_currency = price.currency();

        if price_currency == self.currency {
            Ok(())
        } else {
            Err(CartError::CurrencyMismatch(
                price_currency.iso_alpha_code,
                self.currency.iso_alpha_code,
            ))
        }
    }

    fn push(&mut self, item: LineItem<'a>) -> LineItemKey {
        let key = self.items.insert(item);
        self.order.push(key);

        key
    }
}

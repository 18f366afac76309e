//! Storefront
//!
//! Host-facing facade wiring the engine into cart events: add-to-cart
//! interception with per-unit separation, guarded quantity changes, the
//! before-totals recalculation hook, and the popup's category-link lookup.

use rusty_money::{Money, MoneyError, iso::Currency};
use smallvec::SmallVec;
use tracing::info;

use crate::{
    badges::{self, Badge},
    cart::{Cart, CartError, LineItemKey},
    catalog::{Catalog, ProductKey, taxonomy::Taxonomy},
    guard::{self, QuantityControl},
    pricing::BogoEngine,
    session::{Notice, NoticeLevel, PopupView, Session},
};

/// Storefront facade owning the catalog view, cart, session and engine.
///
/// Every mutating operation ends with a full pricing pass, mirroring a host
/// that recalculates before totals on each cart event.
#[derive(Debug)]
pub struct Storefront<'a> {
    catalog: Catalog<'a>,
    taxonomy: Taxonomy,
    engine: BogoEngine,
    cart: Cart<'a>,
    session: Session,
}

impl<'a> Storefront<'a> {
    /// Create a storefront with an empty cart in the given currency.
    #[must_use]
    pub fn new(
        catalog: Catalog<'a>,
        taxonomy: Taxonomy,
        engine: BogoEngine,
        currency: &'static Currency,
    ) -> Self {
        Self {
            catalog,
            taxonomy,
            engine,
            cart: Cart::new(currency),
            session: Session::new(),
        }
    }

    /// The current cart.
    pub fn cart(&self) -> &Cart<'a> {
        &self.cart
    }

    /// The catalog backing this storefront.
    pub fn catalog(&self) -> &Catalog<'a> {
        &self.catalog
    }

    /// Drain queued user-facing notices.
    pub fn take_notices(&mut self) -> Vec<Notice> {
        self.session.take_notices()
    }

    /// Add a product to the cart.
    ///
    /// BOGO-eligible products are unit-separated: the request is forced to
    /// quantity one and the remainder re-added as further single-unit,
    /// non-mergeable lines, so each eligible line represents exactly one
    /// unit for the pairing pass. Other products merge as usual. Eligible
    /// adds arm the one-shot popup. Reprices before returning.
    ///
    /// # Errors
    ///
    /// - [`CartError::ZeroQuantity`]: the quantity was zero.
    /// - [`CartError::UnknownProduct`]: the product is not in the catalog;
    ///   also queues an error-level notice for the shopper.
    /// - [`CartError::CurrencyMismatch`]: the product is priced in another currency.
    pub fn add_to_cart(
        &mut self,
        product: ProductKey,
        quantity: u32,
    ) -> Result<SmallVec<[LineItemKey; 4]>, CartError> {
        if quantity == 0 {
            return Err(CartError::ZeroQuantity);
        }

        let Some(entry) = self.catalog.get(product) else {
            let err = CartError::UnknownProduct;
            self.session.push_notice(NoticeLevel::Error, err.to_string());

            return Err(err);
        };
        let name = entry.name.clone();
        let price = entry.regular_price;
        let eligible = self.engine.is_eligible(&self.catalog, product);

        let mut keys = SmallVec::new();

        if eligible {
            for _ in 0..quantity {
                keys.push(self.cart.add_unit(product, price)?);
            }

            self.session.queue_popup(product);
        } else {
            keys.push(self.cart.add_line(product, quantity, price)?);
        }

        info!(product = %name, quantity, eligible, "added to cart");

        self.recalculate();

        Ok(keys)
    }

    /// Change the quantity of a cart line, subject to the mutation guard.
    ///
    /// A rejected change leaves the cart untouched and queues the
    /// user-facing notice.
    ///
    /// # Errors
    ///
    /// - [`CartError::ZeroQuantity`]: the quantity was zero.
    /// - [`CartError::ItemNotFound`]: the line does not exist.
    /// - [`CartError::QuantityLocked`]: the line is free or BOGO-eligible.
    pub fn update_quantity(&mut self, key: LineItemKey, quantity: u32) -> Result<(), CartError> {
        if quantity == 0 {
            return Err(CartError::ZeroQuantity);
        }

        if let Err(err) = guard::validate_quantity_change(&self.engine, &self.cart, &self.catalog, key)
        {
            if err == CartError::QuantityLocked {
                self.session.push_notice(NoticeLevel::Notice, err.to_string());
            }

            return Err(err);
        }

        self.cart.set_quantity(key, quantity)?;
        self.recalculate();

        Ok(())
    }

    /// Remove a line from the cart.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::ItemNotFound`] if the line does not exist.
    pub fn remove_item(&mut self, key: LineItemKey) -> Result<(), CartError> {
        self.cart.remove(key).ok_or(CartError::ItemNotFound)?;
        self.recalculate();

        Ok(())
    }

    /// The before-totals hook: rerun the pricing pass over the cart.
    pub fn recalculate(&mut self) {
        self.engine.reprice(&mut self.cart, &self.catalog);
    }

    /// Quantity control view for a cart row.
    pub fn quantity_control(&self, key: LineItemKey) -> Option<QuantityControl> {
        guard::quantity_control(&self.engine, &self.cart, &self.catalog, key)
    }

    /// Badge for a cart row.
    pub fn cart_badge(&self, key: LineItemKey) -> Option<Badge> {
        badges::cart_badge(&self.engine, &self.cart, &self.catalog, key)
    }

    /// Badge for a shop or archive tile.
    pub fn shop_badge(&self, product: ProductKey) -> Option<Badge> {
        badges::shop_badge(&self.engine, &self.catalog, product)
    }

    /// Most specific category page URL for a product, backing the popup's
    /// link. Variations resolve through their parent. Unknown products
    /// or categories resolve to `None`; this path never errors.
    pub fn category_link(&self, product: ProductKey) -> Option<String> {
        let identity = self.catalog.pricing_identity(product);
        let entry = self.catalog.get(identity)?;
        let slug = self.taxonomy.leaf_of(&entry.categories)?;

        self.taxonomy.page_url(slug)
    }

    /// Consume the pending one-shot popup, building its view.
    ///
    /// Returns `None` when no popup is armed or the product has vanished; a
    /// missing category link degrades to a popup without one.
    pub fn take_popup(&mut self) -> Option<PopupView<'a>> {
        let product = self.session.take_popup_product()?;
        let entry = self.catalog.get(product)?;

        Some(PopupView {
            title: entry.name.clone(),
            price: entry.regular_price,
            image: entry.image.clone(),
            category_url: self.category_link(product),
        })
    }

    /// Cart total at regular prices.
    ///
    /// # Errors
    ///
    /// Returns a [`MoneyError`] if money arithmetic fails.
    pub fn subtotal(&self) -> Result<Money<'a, Currency>, MoneyError> {
        self.cart.subtotal()
    }

    /// Cart total at effective (post-pairing) prices.
    ///
    /// # Errors
    ///
    /// Returns a [`MoneyError`] if money arithmetic fails.
    pub fn total(&self) -> Result<Money<'a, Currency>, MoneyError> {
        self.cart.total()
    }
}

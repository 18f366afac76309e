//! Catalog
//!
//! Products and the variation-aware category classifier. The host platform
//! owns real product storage; this catalog is the narrow view the pricing
//! engine consumes.

use rusty_money::{Money, iso::Currency};
use slotmap::{SlotMap, new_key_type};

use crate::categories::{CategorySet, EligibleCategories};

pub mod taxonomy;

new_key_type! {
    /// Product Key
    pub struct ProductKey;
}

/// Product
#[derive(Debug, Clone)]
pub struct Product<'a> {
    /// Product name
    pub name: String,

    /// Regular (list) price
    pub regular_price: Money<'a, Currency>,

    /// Parent product, when this product is a variation
    pub parent: Option<ProductKey>,

    /// Category slugs the product belongs to
    pub categories: CategorySet,

    /// Image URL shown by the post-add popup
    pub image: Option<String>,
}

impl<'a> Product<'a> {
    /// Create a standalone product with no categories and no image.
    pub fn new(name: impl Into<String>, regular_price: Money<'a, Currency>) -> Self {
        Self {
            name: name.into(),
            regular_price,
            parent: None,
            categories: CategorySet::empty(),
            image: None,
        }
    }

    /// Attach category slugs to the product.
    #[must_use]
    pub fn with_categories(mut self, categories: CategorySet) -> Self {
        self.categories = categories;
        self
    }

    /// Mark the product as a variation of the given parent.
    #[must_use]
    pub fn variation_of(mut self, parent: ProductKey) -> Self {
        self.parent = Some(parent);
        self
    }

    /// Attach an image URL to the product.
    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }
}

/// Catalog of products keyed by [`ProductKey`].
#[derive(Debug, Default)]
pub struct Catalog<'a> {
    products: SlotMap<ProductKey, Product<'a>>,
}

impl<'a> Catalog<'a> {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self {
            products: SlotMap::with_key(),
        }
    }

    /// Add a product to the catalog.
    pub fn insert(&mut self, product: Product<'a>) -> ProductKey {
        self.products.insert(product)
    }

    /// Get a product by key.
    pub fn get(&self, key: ProductKey) -> Option<&Product<'a>> {
        self.products.get(key)
    }

    /// Remove a product from the catalog.
    pub fn remove(&mut self, key: ProductKey) -> Option<Product<'a>> {
        self.products.remove(key)
    }

    /// Resolve the identity used for category checks: a variation resolves to
    /// its parent, anything else to itself.
    ///
    /// A dangling parent link falls back to the product's own key, so a
    /// half-removed variation classifies from whatever categories it carries
    /// rather than erroring.
    pub fn pricing_identity(&self, key: ProductKey) -> ProductKey {
        self.products
            .get(key)
            .and_then(|product| product.parent)
            .filter(|parent| self.products.contains_key(*parent))
            .unwrap_or(key)
    }

    /// Classify a product against the eligible-category list.
    ///
    /// Resolves variations to their parent first, then returns the first
    /// configured slug the product belongs to. Unknown products classify to
    /// `None`; missing data is never an error on this path.
    pub fn classify<'c>(
        &self,
        eligible: &'c EligibleCategories,
        key: ProductKey,
    ) -> Option<&'c str> {
        let identity = self.pricing_identity(key);
        let product = self.products.get(identity)?;

        eligible.first_match(&product.categories)
    }
}

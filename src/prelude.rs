//! Twofer prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    badges::Badge,
    cart::{Cart, CartError, LineItem, LineItemKey},
    catalog::{Catalog, Product, ProductKey, taxonomy::Taxonomy},
    categories::{CategoryConfigError, CategorySet, EligibleCategories},
    guard::QuantityControl,
    pricing::{BogoEngine, groups::CategoryGroup, units::Unit},
    session::{Notice, NoticeLevel, PopupView, Session},
    storefront::Storefront,
};

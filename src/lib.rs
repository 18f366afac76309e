//! Twofer
//!
//! Twofer is a buy-one-get-one-free promotion engine for storefront carts.
//! It pairs eligible units by category, makes the cheaper member of each
//! pair free, and recomputes the whole assignment idempotently on every
//! cart recalculation. The storefront trimmings (badges, quantity locking,
//! the one-shot post-add popup and its category link) come back as plain
//! view models for the host to render.

pub mod badges;
pub mod cart;
pub mod catalog;
pub mod categories;
pub mod guard;
pub mod prelude;
pub mod pricing;
pub mod session;
pub mod storefront;

//! Cart Mutation Guard
//!
//! Quantity edits on lines inside an active BOGO offer would desynchronise
//! the displayed quantity from the pairing state, so they are rejected and
//! the quantity control renders read-only.

use crate::{
    cart::{Cart, CartError, LineItemKey},
    catalog::Catalog,
    pricing::BogoEngine,
};

/// Rendering state for a cart row's quantity control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityControl {
    /// Quantity may be edited by the shopper.
    Editable(u32),

    /// Quantity is shown read-only while a BOGO offer is active.
    Locked(u32),
}

/// Whether quantity edits are currently locked for a line.
///
/// Classifies the line's product fresh and reads the current free flag,
/// never a cached answer, so the window between a cart mutation and the
/// next pricing pass cannot let an edit slip through. Missing lines are not
/// locked; the change fails on lookup instead.
pub fn quantity_locked(
    engine: &BogoEngine,
    cart: &Cart<'_>,
    catalog: &Catalog<'_>,
    key: LineItemKey,
) -> bool {
    cart.get(key).is_some_and(|item| {
        item.is_bogo_free() || engine.is_eligible(catalog, item.product())
    })
}

/// Validate a quantity-change request against the guard.
///
/// # Errors
///
/// - [`CartError::ItemNotFound`]: the line does not exist.
/// - [`CartError::QuantityLocked`]: the line is free or BOGO-eligible.
pub fn validate_quantity_change(
    engine: &BogoEngine,
    cart: &Cart<'_>,
    catalog: &Catalog<'_>,
    key: LineItemKey,
) -> Result<(), CartError> {
    if cart.get(key).is_none() {
        return Err(CartError::ItemNotFound);
    }

    if quantity_locked(engine, cart, catalog, key) {
        return Err(CartError::QuantityLocked);
    }

    Ok(())
}

/// Quantity control view for a cart row.
pub fn quantity_control(
    engine: &BogoEngine,
    cart: &Cart<'_>,
    catalog: &Catalog<'_>,
    key: LineItemKey,
) -> Option<QuantityControl> {
    let item = cart.get(key)?;

    Some(if quantity_locked(engine, cart, catalog, key) {
        QuantityControl::Locked(item.quantity())
    } else {
        QuantityControl::Editable(item.quantity())
    })
}

//! [`Store`] implementation for [`CartState`]: actions, and persistence after each mutation.

use super::state::{CartState, CART_STORAGE_KEY};
use crate::framework::Store;
use crate::model::{CartLineItem, ProductId, ProductRef};
use crate::storage::Storage;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Intents accepted by the cart store.
#[derive(Debug, Clone, PartialEq)]
pub enum CartAction {
    /// Replace the lines with whatever storage holds.
    Hydrate,
    AddItem { product: ProductRef, quantity: u32 },
    RemoveItem(ProductId),
    /// Signed so that callers can pass through user input; `<= 0` removes the line.
    UpdateQuantity { product_id: ProductId, quantity: i64 },
    Clear,
    ToggleOpen,
}

impl Store for CartState {
    const NAME: &'static str = "cart";
    type Action = CartAction;
    type Kind = ();
    type Context = Arc<dyn Storage>;

    fn reduce(&mut self, action: CartAction, storage: &Arc<dyn Storage>) {
        match action {
            CartAction::Hydrate => {
                self.replace_items(load(storage.as_ref()));
                info!(lines = self.items.len(), "Cart hydrated");
                return;
            }
            CartAction::AddItem { product, quantity } => self.add_item(product, quantity),
            CartAction::RemoveItem(product_id) => {
                self.remove_item(product_id);
            }
            CartAction::UpdateQuantity {
                product_id,
                quantity,
            } => {
                self.update_quantity(product_id, quantity);
            }
            CartAction::Clear => self.clear(),
            CartAction::ToggleOpen => {
                self.toggle_open();
                return;
            }
        }

        save(storage.as_ref(), &self.items);
    }
}

/// Reads the persisted lines. Anything unreadable counts as an empty cart.
fn load(storage: &dyn Storage) -> Vec<CartLineItem> {
    let raw = match storage.get(CART_STORAGE_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(e) => {
            warn!(error = %e, "Failed to read cart from storage");
            return Vec::new();
        }
    };

    if raw.trim().is_empty() {
        return Vec::new();
    }

    match serde_json::from_str(&raw) {
        Ok(items) => items,
        Err(e) => {
            warn!(error = %e, "Discarding malformed cart data");
            Vec::new()
        }
    }
}

/// Writes the full line list. Failures are logged and otherwise ignored.
fn save(storage: &dyn Storage, items: &[CartLineItem]) {
    let json = match serde_json::to_string(items) {
        Ok(json) => json,
        Err(e) => {
            warn!(error = %e, "Failed to encode cart");
            return;
        }
    };

    match storage.set(CART_STORAGE_KEY, &json) {
        Ok(()) => debug!(lines = items.len(), "Cart persisted"),
        Err(e) => warn!(error = %e, "Failed to persist cart"),
    }
}

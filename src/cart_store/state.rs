//! Cart contents and the pure transitions over them.
//!
//! Every transition keeps the cart invariant: at most one line per product id, and every
//! quantity within `[1, product.stock]`. Over-large quantities are clamped and non-positive
//! ones remove the line; none of this is reported as an error.

use crate::model::{CartLineItem, ProductId, ProductRef};
use crate::pricing::CartTotals;
use tracing::debug;

/// Storage key holding the JSON array of cart lines.
pub const CART_STORAGE_KEY: &str = "ecommercepro_cart";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CartState {
    /// Lines in insertion order, which is also display order.
    pub items: Vec<CartLineItem>,
    pub is_cart_open: bool,
}

impl CartState {
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, product_id: ProductId) -> Option<usize> {
        self.items.iter().position(|line| line.product.id == product_id)
    }

    pub fn line(&self, product_id: ProductId) -> Option<&CartLineItem> {
        self.position(product_id).map(|i| &self.items[i])
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Adds `quantity` units of `product`.
    ///
    /// An existing line takes the new product snapshot and grows by `quantity`, capped at the
    /// snapshot's stock. A new line is clamped to `[1, stock]`. A product with no stock never
    /// produces a line: adding it to the cart is ignored, and merging it into an existing line
    /// removes that line.
    pub fn add_item(&mut self, product: ProductRef, quantity: u32) {
        let product_id = product.id;

        match self.position(product_id) {
            Some(i) => {
                let merged = self.items[i]
                    .quantity
                    .saturating_add(quantity)
                    .min(product.stock);
                if merged == 0 {
                    debug!(%product_id, "Out of stock, removing line");
                    self.items.remove(i);
                    return;
                }
                if merged < self.items[i].quantity.saturating_add(quantity) {
                    debug!(%product_id, stock = product.stock, "Quantity capped at stock");
                }
                let line = &mut self.items[i];
                line.product = product;
                line.quantity = merged;
            }
            None => {
                if !product.is_in_stock() {
                    debug!(%product_id, "Out of stock, not added");
                    return;
                }
                let clamped = quantity.clamp(1, product.stock);
                if clamped != quantity {
                    debug!(%product_id, requested = quantity, clamped, "Quantity clamped");
                }
                self.items.push(CartLineItem::new(product, clamped));
            }
        }
    }

    /// Returns whether a line was removed.
    pub fn remove_item(&mut self, product_id: ProductId) -> bool {
        let before = self.items.len();
        self.items.retain(|line| line.product.id != product_id);
        self.items.len() != before
    }

    /// Sets a line's quantity. Missing lines are left alone; `quantity <= 0` removes the line;
    /// anything above the line's stock is capped.
    ///
    /// Returns whether a line existed.
    pub fn update_quantity(&mut self, product_id: ProductId, quantity: i64) -> bool {
        let Some(i) = self.position(product_id) else {
            return false;
        };

        if quantity <= 0 {
            self.items.remove(i);
            return true;
        }

        let line = &mut self.items[i];
        let stock = line.product.stock;
        let capped = u32::try_from(quantity).unwrap_or(u32::MAX).min(stock);
        if capped == 0 {
            self.items.remove(i);
        } else {
            line.quantity = capped;
        }
        true
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn toggle_open(&mut self) {
        self.is_cart_open = !self.is_cart_open;
    }

    /// Replaces the lines wholesale, folding them back into a valid cart: repeated products
    /// are merged into their first line and quantities are clamped to stock, dropping lines
    /// left empty. A list that already satisfies the invariant is kept as is.
    pub fn replace_items(&mut self, items: Vec<CartLineItem>) {
        let mut normalized: Vec<CartLineItem> = Vec::with_capacity(items.len());
        for line in items {
            match normalized
                .iter_mut()
                .find(|kept| kept.product.id == line.product.id)
            {
                Some(kept) => kept.quantity = kept.quantity.saturating_add(line.quantity),
                None => normalized.push(line),
            }
        }
        for line in &mut normalized {
            line.quantity = line.quantity.min(line.product.stock);
        }
        normalized.retain(|line| line.quantity > 0);
        self.items = normalized;
    }

    /// Derived totals for the current lines.
    pub fn totals(&self) -> CartTotals {
        CartTotals::from_items(&self.items)
    }
}

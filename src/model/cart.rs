use crate::model::ProductRef;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One product-and-quantity pair in the cart.
///
/// The full product snapshot is kept so the cart can be rendered (name, image, price)
/// without another catalog request. This is also the persisted shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLineItem {
    pub product: ProductRef,
    pub quantity: u32,
}

impl CartLineItem {
    pub fn new(product: ProductRef, quantity: u32) -> Self {
        Self { product, quantity }
    }

    /// Unit price times quantity, at full precision.
    pub fn line_total(&self) -> Decimal {
        self.product.price * Decimal::from(self.quantity)
    }
}

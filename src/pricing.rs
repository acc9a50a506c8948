//! # Pricing
//!
//! Derived cart totals. Nothing here is stored: totals are recomputed from the line items on
//! every read, with exact decimal arithmetic. Rounding to cents happens only in
//! [`format_amount`], at display time.

use crate::model::CartLineItem;
use rust_decimal::{Decimal, RoundingStrategy};

/// Orders with a subtotal strictly above this ship for free.
pub const FREE_SHIPPING_THRESHOLD: Decimal = Decimal::from_parts(50, 0, 0, false, 0);
/// Flat shipping fee below the threshold (9.99).
pub const SHIPPING_FEE: Decimal = Decimal::from_parts(999, 0, 0, false, 2);
/// Sales tax rate applied to the subtotal (8%).
pub const TAX_RATE: Decimal = Decimal::from_parts(8, 0, 0, false, 2);

/// Totals derived from a list of cart lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartTotals {
    pub total_items: u64,
    pub subtotal: Decimal,
    pub shipping: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
}

impl CartTotals {
    pub fn from_items(items: &[CartLineItem]) -> Self {
        let total_items = items.iter().map(|line| u64::from(line.quantity)).sum();
        let subtotal: Decimal = items.iter().map(CartLineItem::line_total).sum();
        let shipping = shipping_for(subtotal);
        let tax = subtotal * TAX_RATE;

        Self {
            total_items,
            subtotal,
            shipping,
            tax,
            total: subtotal + shipping + tax,
        }
    }

    pub fn has_free_shipping(&self) -> bool {
        self.shipping.is_zero()
    }
}

/// Shipping is a step function with a single breakpoint.
pub fn shipping_for(subtotal: Decimal) -> Decimal {
    if subtotal > FREE_SHIPPING_THRESHOLD {
        Decimal::ZERO
    } else {
        SHIPPING_FEE
    }
}

/// Renders an amount with two decimal places, rounding half away from zero.
pub fn format_amount(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.2}", rounded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ProductRef;
    use rust_decimal_macros::dec;

    fn line(id: u64, price: Decimal, quantity: u32) -> CartLineItem {
        CartLineItem::new(ProductRef::new(id, format!("p{id}"), price, 100), quantity)
    }

    #[test]
    fn below_threshold_pays_flat_shipping() {
        let totals = CartTotals::from_items(&[line(1, dec!(30), 1)]);

        assert_eq!(totals.total_items, 1);
        assert_eq!(totals.subtotal, dec!(30.00));
        assert_eq!(totals.shipping, dec!(9.99));
        assert_eq!(totals.tax, dec!(2.40));
        assert_eq!(totals.total, dec!(42.39));
    }

    #[test]
    fn above_threshold_ships_free() {
        let totals = CartTotals::from_items(&[line(1, dec!(60), 1)]);

        assert_eq!(totals.subtotal, dec!(60.00));
        assert_eq!(totals.shipping, Decimal::ZERO);
        assert!(totals.has_free_shipping());
        assert_eq!(totals.tax, dec!(4.80));
        assert_eq!(totals.total, dec!(64.80));
    }

    #[test]
    fn exactly_at_threshold_still_pays_shipping() {
        let totals = CartTotals::from_items(&[line(1, dec!(25), 2)]);
        assert_eq!(totals.subtotal, dec!(50));
        assert_eq!(totals.shipping, dec!(9.99));
    }

    #[test]
    fn sums_quantities_and_line_totals() {
        let totals = CartTotals::from_items(&[line(1, dec!(19.99), 3), line(2, dec!(0.01), 5)]);
        assert_eq!(totals.total_items, 8);
        assert_eq!(totals.subtotal, dec!(60.02));
        assert_eq!(totals.tax, dec!(4.8016));
        assert_eq!(totals.total, dec!(64.8216));
    }

    #[test]
    fn empty_cart_has_zero_subtotal() {
        let totals = CartTotals::from_items(&[]);
        assert_eq!(totals.total_items, 0);
        assert_eq!(totals.subtotal, Decimal::ZERO);
        assert_eq!(totals.tax, Decimal::ZERO);
        assert_eq!(totals.shipping, SHIPPING_FEE);
    }

    #[test]
    fn derivation_is_deterministic() {
        let items = [line(1, dec!(12.345), 7), line(2, dec!(3.3), 3)];
        assert_eq!(CartTotals::from_items(&items), CartTotals::from_items(&items));
    }

    #[test]
    fn formats_to_cents_only_for_display() {
        assert_eq!(format_amount(dec!(64.8216)), "64.82");
        assert_eq!(format_amount(dec!(2.405)), "2.41");
        assert_eq!(format_amount(dec!(9.99)), "9.99");
        assert_eq!(format_amount(Decimal::ZERO), "0.00");
    }
}

//! Checkout form data and the order-creation payload built from it.

use crate::model::{CartLineItem, OrderAddress, OrderCustomer, OrderItem};
use crate::pricing::CartTotals;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How the customer chose to pay. Payment details are forwarded, never validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentChoice {
    Card { number: String },
    PayPal,
}

/// Shipping and payment details collected by the checkout form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: OrderAddress,
    pub payment: PaymentChoice,
}

/// Payment section of a [`CreateOrderPayload`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    pub payment_method: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credit_card: Option<String>,
}

/// Body of `POST /orders`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderPayload {
    pub customer: OrderCustomer,
    pub items: Vec<OrderItem>,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_amount: Decimal,
    pub payment: PaymentRequest,
}

impl CreateOrderPayload {
    /// Builds the payload from the cart lines and the checkout form.
    ///
    /// `total_amount` is the cart's derived total at this moment; the server is not expected
    /// to recompute it. A fresh customer id is generated for every submission.
    pub fn from_cart(items: &[CartLineItem], form: CheckoutForm) -> Self {
        let totals = CartTotals::from_items(items);

        let order_items = items
            .iter()
            .map(|line| OrderItem {
                product_id: line.product.id.to_string(),
                product_name: line.product.name.clone(),
                category: line.product.category.clone(),
                quantity: line.quantity,
                price: line.product.price,
            })
            .collect();

        let payment = match form.payment {
            PaymentChoice::Card { number } => PaymentRequest {
                payment_method: "Card".to_string(),
                credit_card: Some(number),
            },
            PaymentChoice::PayPal => PaymentRequest {
                payment_method: "PayPal".to_string(),
                credit_card: None,
            },
        };

        Self {
            customer: OrderCustomer {
                customer_id: uuid::Uuid::new_v4().to_string(),
                first_name: form.first_name,
                last_name: form.last_name,
                email: form.email,
                phone: form.phone,
                address: form.address,
            },
            items: order_items,
            total_amount: totals.total,
            payment,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ProductRef;
    use rust_decimal_macros::dec;

    fn form(payment: PaymentChoice) -> CheckoutForm {
        CheckoutForm {
            first_name: "Grace".into(),
            last_name: "Hopper".into(),
            email: "grace@example.com".into(),
            phone: "555-0100".into(),
            address: OrderAddress {
                street: "1 Navy Way".into(),
                city: "Arlington".into(),
                state: "VA".into(),
                zipcode: "22202".into(),
                country: "United States".into(),
            },
            payment,
        }
    }

    #[test]
    fn payload_total_matches_cart_total() {
        let items = vec![
            CartLineItem::new(ProductRef::new(1, "Pen", dec!(2.50), 10).with_category("Office"), 4),
            CartLineItem::new(ProductRef::new(2, "Pad", dec!(5.00), 3), 1),
        ];

        let payload = CreateOrderPayload::from_cart(&items, form(PaymentChoice::PayPal));

        assert_eq!(payload.total_amount, CartTotals::from_items(&items).total);
        assert_eq!(payload.items.len(), 2);
        assert_eq!(payload.items[0].product_id, "1");
        assert_eq!(payload.items[0].category, "Office");
        assert_eq!(payload.items[0].quantity, 4);
        assert_eq!(payload.payment.payment_method, "PayPal");
        assert_eq!(payload.payment.credit_card, None);
        assert!(!payload.customer.customer_id.is_empty());
    }

    #[test]
    fn card_number_is_forwarded_only_for_card_payments() {
        let payload = CreateOrderPayload::from_cart(
            &[],
            form(PaymentChoice::Card {
                number: "4111111111111111".into(),
            }),
        );
        assert_eq!(payload.payment.payment_method, "Card");
        assert_eq!(payload.payment.credit_card.as_deref(), Some("4111111111111111"));

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["payment"]["paymentMethod"], "Card");
        assert!(json["customer"]["customerId"].is_string());
        assert!(json["totalAmount"].is_number());
    }
}

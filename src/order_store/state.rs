//! Order history, the current order and the request lifecycle flags.
//!
//! Each request transition sets `loading` and clears `error`; each resolution clears
//! `loading`. Failures never touch `orders` or `current_order`.

use crate::model::OrderRecord;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderState {
    /// Most recent first once an order has been created in this session.
    pub orders: Vec<OrderRecord>,
    /// Set by a successful create or detail fetch; cleared only explicitly or by a new detail request.
    pub current_order: Option<OrderRecord>,
    pub loading: bool,
    pub error: Option<String>,
}

impl OrderState {
    pub fn new() -> Self {
        Self::default()
    }

    fn start(&mut self) {
        self.loading = true;
        self.error = None;
    }

    fn fail(&mut self, message: String) {
        self.loading = false;
        self.error = Some(message);
    }

    pub fn request_create(&mut self) {
        self.start();
    }

    pub fn resolve_create_success(&mut self, order: OrderRecord) {
        self.loading = false;
        self.orders.insert(0, order.clone());
        self.current_order = Some(order);
    }

    pub fn resolve_create_failure(&mut self, message: String) {
        self.fail(message);
    }

    pub fn request_list(&mut self) {
        self.start();
    }

    pub fn resolve_list_success(&mut self, orders: Vec<OrderRecord>) {
        self.loading = false;
        self.orders = orders;
    }

    pub fn resolve_list_failure(&mut self, message: String) {
        self.fail(message);
    }

    /// Also drops the current order, so a previous detail is not shown while the new one loads.
    pub fn request_detail(&mut self) {
        self.start();
        self.current_order = None;
    }

    pub fn resolve_detail_success(&mut self, order: OrderRecord) {
        self.loading = false;
        self.current_order = Some(order);
    }

    pub fn resolve_detail_failure(&mut self, message: String) {
        self.fail(message);
    }

    pub fn clear_current(&mut self) {
        self.current_order = None;
    }
}

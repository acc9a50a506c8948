//! # Scripted API
//!
//! [`MockApi`] answers [`StorefrontApi`] calls from a list of expectations registered by the
//! test. Expectations are matched by call, not by registration order, because workers race
//! each other to the API.
//!
//! A response can be **gated** on a oneshot receiver: the call stays pending until the test
//! fires the sender, which is how tests decide which of two concurrent requests finishes last.
//!
//! ```rust
//! use storefront_core::api::{MockApi, StorefrontApi};
//!
//! #[tokio::main]
//! async fn main() {
//!     let api = MockApi::new();
//!     api.expect_list_orders().return_ok(vec![]);
//!
//!     assert!(api.list_orders().await.unwrap().is_empty());
//!     api.verify();
//! }
//! ```

use super::{ApiError, StorefrontApi};
use crate::model::{CreateOrderPayload, OrderRecord, ProductId, ProductRef};
use async_trait::async_trait;
use std::sync::{Arc, Mutex, MutexGuard};
use tokio::sync::oneshot;
use tracing::debug;

/// One call made against the API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiCall {
    ListProducts,
    GetProduct(ProductId),
    ListOrders,
    GetOrder(String),
    CreateOrder,
}

#[derive(Debug)]
enum Canned {
    Products(Result<Vec<ProductRef>, ApiError>),
    Product(Result<ProductRef, ApiError>),
    Orders(Result<Vec<OrderRecord>, ApiError>),
    Order(Result<OrderRecord, ApiError>),
}

#[derive(Debug)]
struct Expectation {
    call: ApiCall,
    gate: Option<oneshot::Receiver<()>>,
    response: Canned,
}

#[derive(Debug, Default)]
struct Inner {
    expectations: Vec<Expectation>,
    calls: Vec<ApiCall>,
    payloads: Vec<CreateOrderPayload>,
}

/// In-memory [`StorefrontApi`] driven by expectations.
#[derive(Debug, Clone, Default)]
pub struct MockApi {
    inner: Arc<Mutex<Inner>>,
}

/// Builder returned by the `expect_*` methods. The expectation is registered by
/// [`return_ok`](Self::return_ok) or [`return_err`](Self::return_err).
#[must_use = "an expectation is only registered by return_ok or return_err"]
pub struct ExpectationBuilder<T> {
    api: MockApi,
    call: ApiCall,
    gate: Option<oneshot::Receiver<()>>,
    wrap: fn(Result<T, ApiError>) -> Canned,
}

impl<T> ExpectationBuilder<T> {
    /// Holds the response back until `gate` fires (or its sender is dropped).
    pub fn gated(mut self, gate: oneshot::Receiver<()>) -> Self {
        self.gate = Some(gate);
        self
    }

    pub fn return_ok(self, value: T) -> MockApi {
        self.register(Ok(value))
    }

    pub fn return_err(self, error: ApiError) -> MockApi {
        self.register(Err(error))
    }

    fn register(self, result: Result<T, ApiError>) -> MockApi {
        let expectation = Expectation {
            call: self.call,
            gate: self.gate,
            response: (self.wrap)(result),
        };
        self.api.lock().expectations.push(expectation);
        self.api
    }
}

impl MockApi {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn builder<T>(&self, call: ApiCall, wrap: fn(Result<T, ApiError>) -> Canned) -> ExpectationBuilder<T> {
        ExpectationBuilder {
            api: self.clone(),
            call,
            gate: None,
            wrap,
        }
    }

    pub fn expect_list_products(&self) -> ExpectationBuilder<Vec<ProductRef>> {
        self.builder(ApiCall::ListProducts, Canned::Products)
    }

    pub fn expect_get_product(&self, id: impl Into<ProductId>) -> ExpectationBuilder<ProductRef> {
        self.builder(ApiCall::GetProduct(id.into()), Canned::Product)
    }

    pub fn expect_list_orders(&self) -> ExpectationBuilder<Vec<OrderRecord>> {
        self.builder(ApiCall::ListOrders, Canned::Orders)
    }

    pub fn expect_get_order(&self, order_id: impl Into<String>) -> ExpectationBuilder<OrderRecord> {
        self.builder(ApiCall::GetOrder(order_id.into()), Canned::Order)
    }

    pub fn expect_create_order(&self) -> ExpectationBuilder<OrderRecord> {
        self.builder(ApiCall::CreateOrder, Canned::Order)
    }

    /// Every call received so far, in arrival order.
    pub fn calls(&self) -> Vec<ApiCall> {
        self.lock().calls.clone()
    }

    /// Bodies received by `create_order`, in arrival order.
    pub fn created_payloads(&self) -> Vec<CreateOrderPayload> {
        self.lock().payloads.clone()
    }

    /// Panics if a registered expectation was never consumed.
    pub fn verify(&self) {
        let inner = self.lock();
        let pending: Vec<&ApiCall> = inner.expectations.iter().map(|e| &e.call).collect();
        assert!(pending.is_empty(), "unmet API expectations: {pending:?}");
    }

    async fn take(&self, call: ApiCall) -> Result<Canned, ApiError> {
        let expectation = {
            let mut inner = self.lock();
            inner.calls.push(call.clone());
            let position = inner.expectations.iter().position(|e| e.call == call);
            position.map(|i| inner.expectations.remove(i))
        };

        let Some(expectation) = expectation else {
            return Err(ApiError::Other(format!("Unexpected API call: {call:?}")));
        };

        if let Some(gate) = expectation.gate {
            debug!(?call, "Holding response until released");
            let _ = gate.await;
        }
        Ok(expectation.response)
    }
}

fn mismatch(call: &str) -> ApiError {
    ApiError::Other(format!("Mock response of the wrong shape for {call}"))
}

#[async_trait]
impl StorefrontApi for MockApi {
    async fn list_products(&self) -> Result<Vec<ProductRef>, ApiError> {
        match self.take(ApiCall::ListProducts).await? {
            Canned::Products(result) => result,
            _ => Err(mismatch("list_products")),
        }
    }

    async fn get_product(&self, id: ProductId) -> Result<ProductRef, ApiError> {
        match self.take(ApiCall::GetProduct(id)).await? {
            Canned::Product(result) => result,
            _ => Err(mismatch("get_product")),
        }
    }

    async fn list_orders(&self) -> Result<Vec<OrderRecord>, ApiError> {
        match self.take(ApiCall::ListOrders).await? {
            Canned::Orders(result) => result,
            _ => Err(mismatch("list_orders")),
        }
    }

    async fn get_order(&self, order_id: &str) -> Result<OrderRecord, ApiError> {
        match self.take(ApiCall::GetOrder(order_id.to_string())).await? {
            Canned::Order(result) => result,
            _ => Err(mismatch("get_order")),
        }
    }

    async fn create_order(&self, payload: &CreateOrderPayload) -> Result<OrderRecord, ApiError> {
        self.lock().payloads.push(payload.clone());
        match self.take(ApiCall::CreateOrder).await? {
            Canned::Order(result) => result,
            _ => Err(mismatch("create_order")),
        }
    }
}

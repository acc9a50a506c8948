//! # Storefront API
//!
//! The REST collaborator behind the order and product stores. Workers only see the
//! [`StorefrontApi`] trait:
//!
//! - [`HttpApi`] talks to the real service with `reqwest`.
//! - [`MockApi`] returns scripted responses and can hold them back until a test releases them.

mod error;
mod http;
pub mod mock;

pub use error::ApiError;
pub use http::HttpApi;
pub use mock::MockApi;

use crate::model::{CreateOrderPayload, OrderRecord, ProductId, ProductRef};
use async_trait::async_trait;

#[async_trait]
pub trait StorefrontApi: Send + Sync {
    /// `GET /products?length=N`
    async fn list_products(&self) -> Result<Vec<ProductRef>, ApiError>;

    /// `GET /products/{id}`
    async fn get_product(&self, id: ProductId) -> Result<ProductRef, ApiError>;

    /// `GET /orders?length=N`
    async fn list_orders(&self) -> Result<Vec<OrderRecord>, ApiError>;

    /// `GET /orders/{id}`
    async fn get_order(&self, order_id: &str) -> Result<OrderRecord, ApiError>;

    /// `POST /orders`
    async fn create_order(&self, payload: &CreateOrderPayload) -> Result<OrderRecord, ApiError>;
}

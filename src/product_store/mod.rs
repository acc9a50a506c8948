//! # Product Store
//!
//! The fetched catalog page and the product being viewed. Same request lifecycle as the order
//! store, with two intent kinds (list and detail) plus page tracking.

pub mod state;

pub use state::ProductState;

use crate::framework::{Store, StoreActor, StoreClient};
use crate::model::{ProductId, ProductRef};
use thiserror::Error;

pub const LIST_FAILED: &str = "Failed to fetch products";
pub const DETAIL_FAILED: &str = "Failed to fetch product";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProductIntent {
    List,
    Detail,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ProductAction {
    ListRequested,
    ListSucceeded(Vec<ProductRef>),
    ListFailed(String),
    DetailRequested(ProductId),
    DetailSucceeded(ProductRef),
    DetailFailed(String),
    SetCurrentPage(u32),
    ClearSelected,
}

/// Errors returned by [`ProductClient`](crate::clients::ProductClient).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProductError {
    #[error("Product store unavailable: {0}")]
    StoreUnavailable(String),
}

impl Store for ProductState {
    const NAME: &'static str = "products";
    type Action = ProductAction;
    type Kind = ProductIntent;
    type Context = ();

    fn reduce(&mut self, action: ProductAction, _: &()) {
        match action {
            ProductAction::ListRequested => self.request_list(),
            ProductAction::ListSucceeded(products) => self.resolve_list_success(products),
            ProductAction::ListFailed(message) => self.resolve_list_failure(message),
            ProductAction::DetailRequested(_) => self.request_detail(),
            ProductAction::DetailSucceeded(product) => self.resolve_detail_success(product),
            ProductAction::DetailFailed(message) => self.resolve_detail_failure(message),
            ProductAction::SetCurrentPage(page) => self.set_current_page(page),
            ProductAction::ClearSelected => self.clear_selected(),
        }
    }
}

/// Creates the product actor and its client.
pub fn new() -> (StoreActor<ProductState>, StoreClient<ProductState>) {
    StoreActor::new(32, ProductState::new())
}

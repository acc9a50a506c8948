//! # Order Store
//!
//! Order history and the current order, driven by three asynchronous intents (create, list,
//! detail) with one generation counter each. The transitions are in [`state`]; the action
//! mapping in [`store`].

pub mod error;
pub mod state;
pub mod store;

pub use error::OrderError;
pub use state::OrderState;
pub use store::{OrderAction, OrderIntent};

use crate::framework::{StoreActor, StoreClient};

/// Fallback failure messages, used when neither the server nor the transport supplied one.
pub const CREATE_FAILED: &str = "Failed to create order";
pub const LIST_FAILED: &str = "Failed to fetch orders";
pub const DETAIL_FAILED: &str = "Failed to fetch order details";

/// Creates the order actor and its client. The actor runs with `()` as context.
pub fn new() -> (StoreActor<OrderState>, StoreClient<OrderState>) {
    StoreActor::new(32, OrderState::new())
}

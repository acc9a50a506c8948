//! # Cart Store
//!
//! Ordered cart lines plus the drawer-open flag, persisted to a [`Storage`](crate::storage::Storage)
//! backend under [`CART_STORAGE_KEY`] after every change to the lines.
//!
//! The state and its transitions live in [`state`]; [`store`] wires them to the actor and to
//! persistence. Restoring from storage is never automatic: send [`CartAction::Hydrate`] (or call
//! [`CartClient::hydrate`](crate::clients::CartClient::hydrate)) at startup.

pub mod error;
pub mod state;
pub mod store;

pub use error::CartError;
pub use state::{CartState, CART_STORAGE_KEY};
pub use store::CartAction;

use crate::framework::{StoreActor, StoreClient};

/// Creates the cart actor and its client. Run the actor with the storage backend as context.
pub fn new() -> (StoreActor<CartState>, StoreClient<CartState>) {
    StoreActor::new(32, CartState::new())
}

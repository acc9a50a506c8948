//! Typed wrappers around [`StoreClient`](crate::framework::StoreClient), one per store.
//!
//! All three implement [`StoreAccess`](crate::framework::StoreAccess), which provides
//! `snapshot()`.

pub mod cart_client;
pub mod order_client;
pub mod product_client;

pub use cart_client::CartClient;
pub use order_client::OrderClient;
pub use product_client::ProductClient;

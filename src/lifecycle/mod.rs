//! # Lifecycle
//!
//! Starting, wiring and stopping the store actors, plus tracing setup.
//!
//! [`Storefront`] is the composition root: it creates each actor and its client, injects the
//! context each actor runs with (the storage backend for the cart) and hands the API to the
//! clients that spawn workers. Shutdown drops the clients and awaits the actor tasks.

pub mod storefront;
pub mod tracing;

pub use self::storefront::{Storefront, StorefrontError};
pub use self::tracing::setup_tracing;

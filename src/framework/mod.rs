//! # Store Framework
//!
//! Generic plumbing shared by the cart, order and product stores:
//!
//! 1. **State Layer** ([`Store`]) - plain data plus one `reduce` transition function
//! 2. **Runtime Layer** ([`StoreActor`]) - sequential message processing and ticket checks
//! 3. **Interface Layer** ([`StoreClient`], [`StoreAccess`]) - typed async access
//! 4. **Effect Layer** ([`spawn_worker`]) - asynchronous calls resolved back into a store
//!
//! Business rules live in the stores; the framework only guarantees ordering, atomicity and
//! last-intent-wins.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod error;
pub mod message;
pub mod mock;
pub mod store;
pub mod ticket;
pub mod worker;

// Re-export core types for convenience
pub use actor::StoreActor;
pub use client::StoreClient;
pub use client_trait::StoreAccess;
pub use error::FrameworkError;
pub use message::{Response, StoreRequest};
pub use store::Store;
pub use ticket::{Generations, Ticket};
pub use worker::{spawn_worker, Resolution};

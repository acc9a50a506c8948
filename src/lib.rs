//! # Storefront Core
//!
//! > **Cart, pricing and order state for an e-commerce client, run as Tokio actors.**
//!
//! The crate holds the state a storefront UI reads and the rules for changing it: how cart lines
//! are merged and capped at stock, how totals are derived, how the cart survives a restart, and
//! how order and product requests are tracked while they are in flight.
//!
//! ## Core Concepts
//!
//! ### One actor per store
//! Each store (cart, orders, products) is a plain state type implementing
//! [`Store`](framework::Store). A [`StoreActor`](framework::StoreActor) owns it and applies actions
//! one at a time, so a mutation is never interleaved with another.
//!
//! ### Last intent wins
//! Fetches and order creation are *intents*. Beginning one issues a
//! [`Ticket`](framework::Ticket); a worker task calls the API and resolves the ticket with a
//! success or failure action. The actor applies the resolution only if no newer intent of the
//! same kind was issued in the meantime. Stale network calls are not aborted, their outcomes
//! are simply dropped.
//!
//! ### Failures are state
//! API failures never surface as `Err` from the clients: they end up as a message in the store's
//! `error` field. Client methods only fail when the store task itself is gone.
//!
//! ## Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! Generic actor, client, tickets and workers.
//!
//! ### 2. The Stores ([`cart_store`], [`order_store`], [`product_store`])
//! State types with pure transitions, and their action enums.
//!
//! ### 3. The Interface ([`clients`])
//! [`CartClient`](clients::CartClient), [`OrderClient`](clients::OrderClient) and
//! [`ProductClient`](clients::ProductClient).
//!
//! ### 4. The Collaborators ([`api`], [`storage`])
//! The REST API behind the workers and the key-value backend behind the cart.
//!
//! ### 5. The Orchestrator ([`lifecycle`])
//! [`Storefront`](lifecycle::Storefront) starts everything and shuts it down.
//!
//! Plain data lives in [`model`], derived totals in [`pricing`], environment settings in
//! [`config`].
//!
//! ## Running the Demo
//!
//! ```bash
//! RUST_LOG=info STOREFRONT_DATA_DIR=/tmp/storefront cargo run
//! ```

pub mod api;
pub mod cart_store;
pub mod clients;
pub mod config;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod order_store;
pub mod pricing;
pub mod product_store;
pub mod storage;

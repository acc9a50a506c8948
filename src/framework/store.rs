//! # Store Trait
//!
//! The `Store` trait is the contract every piece of client state (cart, orders, products)
//! implements to be driven by the generic [`StoreActor`](crate::framework::StoreActor).
//! A store owns plain data and a single transition function, `reduce`, which applies one
//! action to it. The actor guarantees actions are applied one at a time, in arrival order.
//!
//! # Associated Types
//! - `Action`: every intent and resolution the store understands.
//! - `Kind`: the asynchronous intent kinds tracked for last-intent-wins. Stores without
//!   asynchronous intents use `()`.
//! - `Context`: dependencies injected when the actor starts (e.g. the cart's storage).

use std::fmt::Debug;
use std::hash::Hash;

/// State managed by a [`StoreActor`](crate::framework::StoreActor).
pub trait Store: Clone + Debug + Send + Sync + 'static {
    /// Short name used as the `store` field in logs.
    const NAME: &'static str;

    /// Every action this store can apply.
    type Action: Send + Sync + Debug + 'static;

    /// Asynchronous intent kinds. Each kind has its own generation counter.
    type Kind: Eq + Hash + Copy + Send + Sync + Debug + 'static;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync + 'static;

    /// Applies one action.
    ///
    /// Must not fail: anything that can go wrong (bad stored data, a write error) is
    /// recovered here and at most logged.
    fn reduce(&mut self, action: Self::Action, ctx: &Self::Context);
}

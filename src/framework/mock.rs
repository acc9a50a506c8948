//! # Mock Store Client
//!
//! Utilities for testing domain clients and workers without spawning a store actor.
//!
//! Use [`create_mock_client`] to get a client and the receiving end of its channel, then use
//! helpers like [`expect_begin`] or [`expect_resolve`] to assert what the code under test
//! sent, and reply however the test needs (including declaring a ticket superseded).
//!
//! ```rust
//! use storefront_core::framework::mock::{create_mock_client, expect_dispatch};
//! use storefront_core::framework::Store;
//!
//! #[derive(Clone, Debug, Default)]
//! struct Counter { value: i64 }
//! #[derive(Debug, PartialEq)]
//! enum CounterAction { Add(i64) }
//!
//! impl Store for Counter {
//!     const NAME: &'static str = "counter";
//!     type Action = CounterAction;
//!     type Kind = ();
//!     type Context = ();
//!     fn reduce(&mut self, action: CounterAction, _: &()) {
//!         match action { CounterAction::Add(n) => self.value += n }
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (client, mut receiver) = create_mock_client::<Counter>(10);
//!     let task = tokio::spawn(async move { client.dispatch(CounterAction::Add(3)).await });
//!
//!     let (action, respond_to) = expect_dispatch(&mut receiver).await.unwrap();
//!     assert_eq!(action, CounterAction::Add(3));
//!     respond_to.send(()).unwrap();
//!
//!     assert!(task.await.unwrap().is_ok());
//! }
//! ```

use crate::framework::message::{Response, StoreRequest};
use crate::framework::store::Store;
use crate::framework::ticket::Ticket;
use crate::framework::StoreClient;
use tokio::sync::mpsc;

/// Creates a client whose requests land on a receiver the test controls.
///
/// # Testing Strategy
/// When the logic under test is a domain client (e.g. `OrderClient`), there is no need to run
/// the real store. The test inspects each request arriving on the channel, asserts it, and
/// answers through the embedded reply sender. This makes stale-ticket paths deterministic.
pub fn create_mock_client<S: Store>(
    buffer_size: usize,
) -> (StoreClient<S>, mpsc::Receiver<StoreRequest<S>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (StoreClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Dispatch request
pub async fn expect_dispatch<S: Store>(
    receiver: &mut mpsc::Receiver<StoreRequest<S>>,
) -> Option<(S::Action, Response<()>)> {
    match receiver.recv().await {
        Some(StoreRequest::Dispatch { action, respond_to }) => Some((action, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Begin request
pub async fn expect_begin<S: Store>(
    receiver: &mut mpsc::Receiver<StoreRequest<S>>,
) -> Option<(S::Kind, S::Action, Response<Ticket<S::Kind>>)> {
    match receiver.recv().await {
        Some(StoreRequest::Begin {
            kind,
            action,
            respond_to,
        }) => Some((kind, action, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Resolve request
pub async fn expect_resolve<S: Store>(
    receiver: &mut mpsc::Receiver<StoreRequest<S>>,
) -> Option<(Ticket<S::Kind>, S::Action, Response<bool>)> {
    match receiver.recv().await {
        Some(StoreRequest::Resolve {
            ticket,
            action,
            respond_to,
        }) => Some((ticket, action, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Snapshot request
pub async fn expect_snapshot<S: Store>(
    receiver: &mut mpsc::Receiver<StoreRequest<S>>,
) -> Option<Response<S>> {
    match receiver.recv().await {
        Some(StoreRequest::Snapshot { respond_to }) => Some(respond_to),
        _ => None,
    }
}

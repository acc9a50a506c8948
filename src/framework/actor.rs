//! # Generic Store Actor
//!
//! This module defines the `StoreActor`, the component that owns a piece of client state and
//! applies every action to it sequentially. It is the "Server" side of the actor model: the
//! state never leaves the task, callers only ever see clones.

use crate::framework::client::StoreClient;
use crate::framework::message::StoreRequest;
use crate::framework::store::Store;
use crate::framework::ticket::Generations;
use tokio::sync::mpsc;
use tracing::{debug, info};

/// The generic actor that owns one store's state.
///
/// # Concurrency Model
/// Each actor processes its messages *sequentially* in a loop, so a mutation is never
/// interleaved with another one and no `Mutex` is needed around the state. Suspension only
/// happens between messages.
///
/// # Last-intent-wins
/// The actor keeps a [`Generations`] table next to the state. `Begin` issues a new ticket for
/// the intent's kind; `Resolve` is applied only when its ticket is still the newest of that
/// kind. Because both the check and the mutation run inside the same loop iteration, a stale
/// resolution can never slip in between.
///
/// # Usage Pattern
///
/// ```rust
/// use storefront_core::framework::{Store, StoreActor};
///
/// #[derive(Clone, Debug, Default)]
/// struct Counter { value: i64 }
///
/// #[derive(Debug)]
/// enum CounterAction { Add(i64) }
///
/// impl Store for Counter {
///     const NAME: &'static str = "counter";
///     type Action = CounterAction;
///     type Kind = ();
///     type Context = ();
///
///     fn reduce(&mut self, action: CounterAction, _: &()) {
///         match action { CounterAction::Add(n) => self.value += n }
///     }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = StoreActor::new(10, Counter::default());
///     tokio::spawn(actor.run(()));
///
///     client.dispatch(CounterAction::Add(2)).await.unwrap();
///     assert_eq!(client.snapshot().await.unwrap().value, 2);
/// }
/// ```
pub struct StoreActor<S: Store> {
    receiver: mpsc::Receiver<StoreRequest<S>>,
    state: S,
    generations: Generations<S::Kind>,
}

impl<S: Store> StoreActor<S> {
    /// Creates a new `StoreActor` and its associated `StoreClient`.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - The capacity of the MPSC channel. If the channel is full,
    ///   calls to the client will wait until there is space.
    /// * `initial` - The state the store starts from.
    pub fn new(buffer_size: usize, initial: S) -> (Self, StoreClient<S>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            state: initial,
            generations: Generations::new(),
        };
        (actor, StoreClient::new(sender))
    }

    /// Runs the actor's event loop, processing messages until every client is dropped.
    ///
    /// # Context Injection
    /// The `context` argument is passed to every `reduce` call. This is how the cart store
    /// receives its storage backend.
    pub async fn run(mut self, context: S::Context) {
        let store = S::NAME;
        info!(store, "Store started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StoreRequest::Dispatch { action, respond_to } => {
                    debug!(store, ?action, "Dispatch");
                    self.state.reduce(action, &context);
                    let _ = respond_to.send(());
                }
                StoreRequest::Begin {
                    kind,
                    action,
                    respond_to,
                } => {
                    let ticket = self.generations.issue(kind);
                    debug!(store, ?kind, generation = ticket.generation, ?action, "Begin");
                    self.state.reduce(action, &context);
                    let _ = respond_to.send(ticket);
                }
                StoreRequest::Resolve {
                    ticket,
                    action,
                    respond_to,
                } => {
                    if self.generations.is_current(&ticket) {
                        debug!(store, kind = ?ticket.kind, generation = ticket.generation, ?action, "Resolve");
                        self.state.reduce(action, &context);
                        let _ = respond_to.send(true);
                    } else {
                        debug!(
                            store,
                            kind = ?ticket.kind,
                            generation = ticket.generation,
                            "Dropped superseded resolution"
                        );
                        let _ = respond_to.send(false);
                    }
                }
                StoreRequest::Snapshot { respond_to } => {
                    let _ = respond_to.send(self.state.clone());
                }
            }
        }

        info!(store, "Shutdown");
    }
}

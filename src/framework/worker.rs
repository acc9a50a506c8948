//! # Request-Effect Workers
//!
//! A worker is a spawned task that performs one asynchronous call on behalf of an issued
//! intent and hands the outcome back to the store as an action, together with the intent's
//! ticket. The store decides whether the outcome still matters.

use crate::framework::client::StoreClient;
use crate::framework::store::Store;
use crate::framework::ticket::Ticket;
use std::future::Future;
use tokio::task::JoinHandle;
use tracing::{debug, warn, Instrument};

/// How a worker's outcome ended up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// The outcome was applied to the store.
    Applied,
    /// A newer intent of the same kind had been issued; the outcome was discarded.
    Superseded,
    /// The store actor was gone before the outcome could be delivered.
    StoreClosed,
}

/// Spawns a worker for `ticket`.
///
/// `call` is awaited, and its result is turned into a store action by `into_action`, which
/// is where failures become messages. Nothing the call returns can escape the task: every
/// outcome ends as an action sent to the store.
pub fn spawn_worker<S, F, T, E, M>(
    client: StoreClient<S>,
    ticket: Ticket<S::Kind>,
    call: F,
    into_action: M,
) -> JoinHandle<Resolution>
where
    S: Store,
    F: Future<Output = Result<T, E>> + Send + 'static,
    T: Send + 'static,
    E: Send + 'static,
    M: FnOnce(Result<T, E>) -> S::Action + Send + 'static,
{
    let span = tracing::info_span!(
        "worker",
        store = S::NAME,
        kind = ?ticket.kind,
        generation = ticket.generation
    );

    tokio::spawn(
        async move {
            let action = into_action(call.await);
            match client.resolve(ticket, action).await {
                Ok(true) => Resolution::Applied,
                Ok(false) => {
                    debug!("Outcome superseded by a newer intent");
                    Resolution::Superseded
                }
                Err(e) => {
                    warn!(error = %e, "Store gone before resolution");
                    Resolution::StoreClosed
                }
            }
        }
        .instrument(span),
    )
}

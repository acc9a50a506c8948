//! # Store Messages
//!
//! The message type carried from a [`StoreClient`](crate::framework::StoreClient) to its
//! [`StoreActor`](crate::framework::StoreActor).

use crate::framework::store::Store;
use crate::framework::ticket::Ticket;
use tokio::sync::oneshot;

/// Type alias for the one-shot reply channel used by store actors.
pub type Response<T> = oneshot::Sender<T>;

/// Internal message type sent to a store actor.
///
/// - **Dispatch**: apply a synchronous action (cart edits, `clear_current`, paging).
/// - **Begin**: apply the request action of an asynchronous intent and issue a [`Ticket`]
///   that supersedes earlier tickets of the same kind.
/// - **Resolve**: apply a success/failure action, but only if the ticket is still current.
///   Replies `true` when applied, `false` when dropped as stale.
/// - **Snapshot**: reply with a clone of the current state.
#[derive(Debug)]
pub enum StoreRequest<S: Store> {
    Dispatch {
        action: S::Action,
        respond_to: Response<()>,
    },
    Begin {
        kind: S::Kind,
        action: S::Action,
        respond_to: Response<Ticket<S::Kind>>,
    },
    Resolve {
        ticket: Ticket<S::Kind>,
        action: S::Action,
        respond_to: Response<bool>,
    },
    Snapshot {
        respond_to: Response<S>,
    },
}

//! # Generic Client
//!
//! This module defines the generic client for communicating with store actors.

use crate::framework::error::FrameworkError;
use crate::framework::message::StoreRequest;
use crate::framework::store::Store;
use crate::framework::ticket::Ticket;
use tokio::sync::{mpsc, oneshot};

/// A type-safe client for interacting with a `StoreActor`.
///
/// Holds only a sender, so cloning is cheap; clones are handed to worker tasks so they can
/// resolve their tickets. Every method waits for the actor's reply, which means the action
/// has been applied by the time the call returns.
pub struct StoreClient<S: Store> {
    sender: mpsc::Sender<StoreRequest<S>>,
}

impl<S: Store> Clone for StoreClient<S> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<S: Store> StoreClient<S> {
    pub fn new(sender: mpsc::Sender<StoreRequest<S>>) -> Self {
        Self { sender }
    }

    pub async fn dispatch(&self, action: S::Action) -> Result<(), FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Dispatch { action, respond_to })
            .await
            .map_err(|_| FrameworkError::StoreClosed)?;
        response.await.map_err(|_| FrameworkError::StoreDropped)
    }

    /// Starts an asynchronous intent of `kind` and returns its ticket.
    pub async fn begin(
        &self,
        kind: S::Kind,
        action: S::Action,
    ) -> Result<Ticket<S::Kind>, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Begin {
                kind,
                action,
                respond_to,
            })
            .await
            .map_err(|_| FrameworkError::StoreClosed)?;
        response.await.map_err(|_| FrameworkError::StoreDropped)
    }

    /// Resolves an intent. Returns `false` if the ticket had been superseded.
    pub async fn resolve(
        &self,
        ticket: Ticket<S::Kind>,
        action: S::Action,
    ) -> Result<bool, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Resolve {
                ticket,
                action,
                respond_to,
            })
            .await
            .map_err(|_| FrameworkError::StoreClosed)?;
        response.await.map_err(|_| FrameworkError::StoreDropped)
    }

    pub async fn snapshot(&self) -> Result<S, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Snapshot { respond_to })
            .await
            .map_err(|_| FrameworkError::StoreClosed)?;
        response.await.map_err(|_| FrameworkError::StoreDropped)
    }
}

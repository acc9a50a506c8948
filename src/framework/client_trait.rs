//! # StoreAccess Trait
//!
//! Common interface for domain clients, adding a default `snapshot` built on top of a generic
//! `StoreClient`.
use crate::framework::{FrameworkError, Store, StoreClient};
use async_trait::async_trait;

/// Trait for domain clients to inherit standard read access.
///
/// # Example
///
/// ```rust
/// use storefront_core::framework::{FrameworkError, Store, StoreAccess, StoreClient};
///
/// #[derive(Clone, Debug, Default)]
/// struct Flag { on: bool }
/// #[derive(Debug)]
/// enum FlagAction { Toggle }
///
/// impl Store for Flag {
///     const NAME: &'static str = "flag";
///     type Action = FlagAction;
///     type Kind = ();
///     type Context = ();
///     fn reduce(&mut self, _: FlagAction, _: &()) { self.on = !self.on; }
/// }
///
/// struct FlagClient { inner: StoreClient<Flag> }
///
/// impl StoreAccess<Flag> for FlagClient {
///     type Error = String;
///     fn inner(&self) -> &StoreClient<Flag> { &self.inner }
///     fn map_error(e: FrameworkError) -> String { e.to_string() }
/// }
///
/// async fn usage(client: FlagClient) {
///     // snapshot() is provided automatically!
///     let _ = client.snapshot().await;
/// }
/// ```
#[async_trait]
pub trait StoreAccess<S: Store>: Send + Sync {
    /// The domain-specific error type.
    type Error: Send;

    /// Access the inner generic StoreClient.
    fn inner(&self) -> &StoreClient<S>;

    /// Map framework errors to the domain error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch a copy of the current state.
    #[tracing::instrument(skip(self), fields(store = S::NAME))]
    async fn snapshot(&self) -> Result<S, Self::Error> {
        tracing::trace!("Reading snapshot");
        self.inner().snapshot().await.map_err(Self::map_error)
    }
}

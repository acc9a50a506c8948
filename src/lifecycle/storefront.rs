use crate::api::{ApiError, HttpApi, StorefrontApi};
use crate::clients::{CartClient, OrderClient, ProductClient};
use crate::config::{ApiConfig, StorageConfig};
use crate::storage::{Storage, StorageError};
use std::sync::Arc;
use thiserror::Error;
use tokio::task::JoinHandle;
use tracing::{error, info};

#[derive(Debug, Error)]
pub enum StorefrontError {
    #[error("Failed to open storage: {0}")]
    Storage(#[from] StorageError),

    #[error("Failed to build API client: {0}")]
    Api(#[from] ApiError),

    #[error("Store task failed: {0}")]
    TaskFailed(String),
}

/// The running storefront core: one actor per store, plus the clients that talk to them.
///
/// # Wiring
///
/// - The cart actor runs with the storage backend as its context.
/// - The order and product actors need no context; their clients carry the API handle and
///   spawn the workers.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use storefront_core::api::MockApi;
/// use storefront_core::framework::StoreAccess;
/// use storefront_core::lifecycle::Storefront;
/// use storefront_core::storage::MemoryStorage;
///
/// #[tokio::main]
/// async fn main() {
///     let storefront = Storefront::new(Arc::new(MockApi::new()), Arc::new(MemoryStorage::new()));
///
///     storefront.cart.hydrate().await.unwrap();
///     assert!(storefront.cart.snapshot().await.unwrap().items.is_empty());
///
///     storefront.shutdown().await.unwrap();
/// }
/// ```
pub struct Storefront {
    pub cart: CartClient,
    pub orders: OrderClient,
    pub products: ProductClient,

    /// Actor task handles, awaited on shutdown.
    handles: Vec<JoinHandle<()>>,
}

impl Storefront {
    /// Spawns the three store actors. Must be called inside a Tokio runtime.
    pub fn new(api: Arc<dyn StorefrontApi>, storage: Arc<dyn Storage>) -> Self {
        let (cart_actor, cart_client) = crate::cart_store::new();
        let (order_actor, order_client) = crate::order_store::new();
        let (product_actor, product_client) = crate::product_store::new();

        let cart_handle = tokio::spawn(cart_actor.run(storage));
        let order_handle = tokio::spawn(order_actor.run(()));
        let product_handle = tokio::spawn(product_actor.run(()));

        Self {
            cart: CartClient::new(cart_client),
            orders: OrderClient::new(order_client, Arc::clone(&api)),
            products: ProductClient::new(product_client, api),
            handles: vec![cart_handle, order_handle, product_handle],
        }
    }

    /// Builds the HTTP client and the storage backend from configuration, then starts.
    pub fn from_config(api: ApiConfig, storage: StorageConfig) -> Result<Self, StorefrontError> {
        info!(base_url = %api.base_url, data_dir = ?storage.data_dir, "Starting storefront");
        let api = HttpApi::new(api)?;
        let storage = storage.open()?;
        Ok(Self::new(Arc::new(api), storage))
    }

    /// Drops every client and waits for the actors to drain their queues and stop.
    ///
    /// Workers still in flight hold their own client clones, so the actors stay up until those
    /// workers have resolved.
    pub async fn shutdown(self) -> Result<(), StorefrontError> {
        info!("Shutting down storefront...");

        drop(self.cart);
        drop(self.orders);
        drop(self.products);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Store task failed: {:?}", e);
                return Err(StorefrontError::TaskFailed(e.to_string()));
            }
        }

        info!("Storefront shutdown complete.");
        Ok(())
    }
}

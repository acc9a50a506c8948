//! # Storefront Demo
//!
//! Starts the storefront against the configured API, restores the cart, loads a page of
//! products, adds the first one in stock to the cart and logs the totals.
//!
//! Configuration comes from the environment (see [`storefront_core::config`]).

use storefront_core::config::{ApiConfig, StorageConfig};
use storefront_core::framework::StoreAccess;
use storefront_core::lifecycle::{setup_tracing, Storefront};
use storefront_core::pricing::format_amount;
use tracing::{error, info, warn, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let api = ApiConfig::from_env().map_err(|e| e.to_string())?;
    let storage = StorageConfig::from_env();
    let storefront = Storefront::from_config(api, storage).map_err(|e| e.to_string())?;

    storefront.cart.hydrate().await.map_err(|e| e.to_string())?;
    let cart = storefront.cart.snapshot().await.map_err(|e| e.to_string())?;
    info!(lines = cart.items.len(), "Cart restored");

    let span = tracing::info_span!("catalog");
    let products = async {
        info!("Loading products");
        let worker = storefront
            .products
            .list_products()
            .await
            .map_err(|e| e.to_string())?;
        let resolution = worker.await.map_err(|e| e.to_string())?;
        info!(?resolution, "Product request finished");
        storefront
            .products
            .snapshot()
            .await
            .map_err(|e| e.to_string())
    }
    .instrument(span)
    .await?;

    if let Some(message) = &products.error {
        error!(%message, "Could not load products");
    } else if let Some(product) = products.products.iter().find(|p| p.is_in_stock()) {
        info!(product_id = %product.id, name = %product.name, "Adding product to cart");
        storefront
            .cart
            .add_item(product.clone(), 1)
            .await
            .map_err(|e| e.to_string())?;
    } else {
        warn!(count = products.products.len(), "No product in stock");
    }

    let totals = storefront.cart.totals().await.map_err(|e| e.to_string())?;
    info!(
        items = totals.total_items,
        subtotal = %format_amount(totals.subtotal),
        shipping = %format_amount(totals.shipping),
        tax = %format_amount(totals.tax),
        total = %format_amount(totals.total),
        "Cart totals"
    );

    storefront.shutdown().await.map_err(|e| e.to_string())?;

    info!("Demo completed successfully");
    Ok(())
}

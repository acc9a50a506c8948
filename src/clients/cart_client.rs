use crate::cart_store::{CartAction, CartError, CartState};
use crate::framework::{FrameworkError, StoreAccess, StoreClient};
use crate::model::{ProductId, ProductRef};
use crate::pricing::CartTotals;
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for the cart store.
///
/// Every method returns once the store has applied the change and written it to storage, so a
/// following [`snapshot`](StoreAccess::snapshot) always observes it.
#[derive(Clone)]
pub struct CartClient {
    inner: StoreClient<CartState>,
}

impl CartClient {
    pub fn new(inner: StoreClient<CartState>) -> Self {
        Self { inner }
    }

    async fn send(&self, action: CartAction) -> Result<(), CartError> {
        self.inner.dispatch(action).await.map_err(Self::map_error)
    }

    /// Restores the lines from storage.
    #[instrument(skip(self))]
    pub async fn hydrate(&self) -> Result<(), CartError> {
        self.send(CartAction::Hydrate).await
    }

    #[instrument(skip(self, product), fields(product_id = %product.id))]
    pub async fn add_item(&self, product: ProductRef, quantity: u32) -> Result<(), CartError> {
        debug!(?product, "add_item called");
        self.send(CartAction::AddItem { product, quantity }).await
    }

    #[instrument(skip(self))]
    pub async fn remove_item(&self, product_id: ProductId) -> Result<(), CartError> {
        self.send(CartAction::RemoveItem(product_id)).await
    }

    #[instrument(skip(self))]
    pub async fn update_quantity(
        &self,
        product_id: ProductId,
        quantity: i64,
    ) -> Result<(), CartError> {
        self.send(CartAction::UpdateQuantity {
            product_id,
            quantity,
        })
        .await
    }

    #[instrument(skip(self))]
    pub async fn clear(&self) -> Result<(), CartError> {
        self.send(CartAction::Clear).await
    }

    #[instrument(skip(self))]
    pub async fn toggle_open(&self) -> Result<(), CartError> {
        self.send(CartAction::ToggleOpen).await
    }

    /// Totals derived from the current lines.
    pub async fn totals(&self) -> Result<CartTotals, CartError> {
        Ok(self.snapshot().await?.totals())
    }
}

#[async_trait]
impl StoreAccess<CartState> for CartClient {
    type Error = CartError;

    fn inner(&self) -> &StoreClient<CartState> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        CartError::StoreUnavailable(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::{create_mock_client, expect_dispatch, expect_snapshot};
    use rust_decimal_macros::dec;

    #[tokio::test]
    async fn add_item_sends_the_product() {
        let (inner, mut receiver) = create_mock_client::<CartState>(10);
        let client = CartClient::new(inner);
        let product = ProductRef::new(1, "Mug", dec!(8), 4);

        let expected = product.clone();
        let task = tokio::spawn(async move { client.add_item(product, 2).await });

        let (action, respond_to) = expect_dispatch(&mut receiver).await.unwrap();
        assert_eq!(
            action,
            CartAction::AddItem {
                product: expected,
                quantity: 2
            }
        );
        respond_to.send(()).unwrap();
        assert!(task.await.unwrap().is_ok());
    }

    #[tokio::test]
    async fn totals_come_from_the_snapshot() {
        let (inner, mut receiver) = create_mock_client::<CartState>(10);
        let client = CartClient::new(inner);
        let task = tokio::spawn(async move { client.totals().await });

        let respond_to = expect_snapshot(&mut receiver).await.unwrap();
        let mut state = CartState::new();
        state.add_item(ProductRef::new(1, "Boots", dec!(60), 2), 1);
        respond_to.send(state).unwrap();

        let totals = task.await.unwrap().unwrap();
        assert_eq!(totals.total, dec!(64.80));
    }

    #[tokio::test]
    async fn closed_store_is_reported() {
        let (inner, receiver) = create_mock_client::<CartState>(1);
        drop(receiver);
        let client = CartClient::new(inner);

        assert!(matches!(
            client.clear().await,
            Err(CartError::StoreUnavailable(_))
        ));
    }
}

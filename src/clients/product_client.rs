use crate::api::{ApiError, StorefrontApi};
use crate::framework::{spawn_worker, FrameworkError, Resolution, StoreAccess, StoreClient};
use crate::model::{ProductId, ProductRef};
use crate::product_store::{
    ProductAction, ProductError, ProductIntent, ProductState, DETAIL_FAILED, LIST_FAILED,
};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{debug, instrument, warn};

/// Client for the product store. Fetches follow the same pattern as
/// [`OrderClient`](super::OrderClient).
#[derive(Clone)]
pub struct ProductClient {
    inner: StoreClient<ProductState>,
    api: Arc<dyn StorefrontApi>,
}

impl ProductClient {
    pub fn new(inner: StoreClient<ProductState>, api: Arc<dyn StorefrontApi>) -> Self {
        Self { inner, api }
    }

    #[instrument(skip(self))]
    pub async fn list_products(&self) -> Result<JoinHandle<Resolution>, ProductError> {
        let ticket = self
            .inner
            .begin(ProductIntent::List, ProductAction::ListRequested)
            .await
            .map_err(Self::map_error)?;

        let api = Arc::clone(&self.api);
        Ok(spawn_worker(
            self.inner.clone(),
            ticket,
            async move { api.list_products().await },
            |result: Result<Vec<ProductRef>, ApiError>| match result {
                Ok(products) => {
                    debug!(count = products.len(), "Products fetched");
                    ProductAction::ListSucceeded(products)
                }
                Err(e) => {
                    warn!(error = %e, "Fetching products failed");
                    ProductAction::ListFailed(e.user_message(LIST_FAILED))
                }
            },
        ))
    }

    #[instrument(skip(self))]
    pub async fn get_product(
        &self,
        product_id: ProductId,
    ) -> Result<JoinHandle<Resolution>, ProductError> {
        let ticket = self
            .inner
            .begin(
                ProductIntent::Detail,
                ProductAction::DetailRequested(product_id),
            )
            .await
            .map_err(Self::map_error)?;

        let api = Arc::clone(&self.api);
        Ok(spawn_worker(
            self.inner.clone(),
            ticket,
            async move { api.get_product(product_id).await },
            |result: Result<ProductRef, ApiError>| match result {
                Ok(product) => ProductAction::DetailSucceeded(product),
                Err(e) => {
                    warn!(error = %e, "Fetching product failed");
                    ProductAction::DetailFailed(e.user_message(DETAIL_FAILED))
                }
            },
        ))
    }

    pub async fn set_current_page(&self, page: u32) -> Result<(), ProductError> {
        self.inner
            .dispatch(ProductAction::SetCurrentPage(page))
            .await
            .map_err(Self::map_error)
    }

    pub async fn clear_selected(&self) -> Result<(), ProductError> {
        self.inner
            .dispatch(ProductAction::ClearSelected)
            .await
            .map_err(Self::map_error)
    }
}

#[async_trait]
impl StoreAccess<ProductState> for ProductClient {
    type Error = ProductError;

    fn inner(&self) -> &StoreClient<ProductState> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        ProductError::StoreUnavailable(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockApi;
    use crate::framework::mock::{create_mock_client, expect_begin, expect_dispatch, expect_resolve};
    use crate::framework::Ticket;

    #[tokio::test]
    async fn product_fetch_failure_uses_the_default_message() {
        let api = MockApi::new();
        api.expect_get_product(7).return_err(ApiError::Other(String::new()));
        let (inner, mut receiver) = create_mock_client::<ProductState>(10);
        let client = ProductClient::new(inner, Arc::new(api.clone()));

        let request = tokio::spawn(async move { client.get_product(ProductId(7)).await });

        let (kind, action, respond_to) = expect_begin(&mut receiver).await.unwrap();
        assert_eq!(kind, ProductIntent::Detail);
        assert_eq!(action, ProductAction::DetailRequested(ProductId(7)));
        respond_to.send(Ticket { kind, generation: 4 }).unwrap();
        let worker = request.await.unwrap().unwrap();

        let (ticket, action, respond_to) = expect_resolve(&mut receiver).await.unwrap();
        assert_eq!(ticket.generation, 4);
        assert_eq!(
            action,
            ProductAction::DetailFailed("Failed to fetch product".to_string())
        );
        respond_to.send(true).unwrap();
        assert_eq!(worker.await.unwrap(), Resolution::Applied);
    }

    #[tokio::test]
    async fn set_current_page_is_dispatched() {
        let (inner, mut receiver) = create_mock_client::<ProductState>(10);
        let client = ProductClient::new(inner, Arc::new(MockApi::new()));

        let task = tokio::spawn(async move { client.set_current_page(2).await });
        let (action, respond_to) = expect_dispatch(&mut receiver).await.unwrap();
        assert_eq!(action, ProductAction::SetCurrentPage(2));
        respond_to.send(()).unwrap();
        assert!(task.await.unwrap().is_ok());
    }
}

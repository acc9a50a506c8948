use crate::api::{ApiError, StorefrontApi};
use crate::framework::{
    spawn_worker, FrameworkError, Resolution, StoreAccess, StoreClient, Ticket,
};
use crate::model::{CreateOrderPayload, OrderRecord};
use crate::order_store::{
    OrderAction, OrderError, OrderIntent, OrderState, CREATE_FAILED, DETAIL_FAILED, LIST_FAILED,
};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{debug, info, instrument, warn};

/// Client for the order store.
///
/// The request methods mark the intent as started on the store, then spawn a worker that
/// calls the API and resolves the intent. They return as soon as the worker is spawned; await
/// the returned handle to wait for the outcome. Issuing an intent of the same kind again
/// supersedes any worker still in flight.
#[derive(Clone)]
pub struct OrderClient {
    inner: StoreClient<OrderState>,
    api: Arc<dyn StorefrontApi>,
}

impl OrderClient {
    pub fn new(inner: StoreClient<OrderState>, api: Arc<dyn StorefrontApi>) -> Self {
        Self { inner, api }
    }

    async fn begin(
        &self,
        kind: OrderIntent,
        action: OrderAction,
    ) -> Result<Ticket<OrderIntent>, OrderError> {
        self.inner.begin(kind, action).await.map_err(Self::map_error)
    }

    /// Submits a new order. On success the created order becomes the current order and is
    /// prepended to the history. The cart is not touched.
    #[instrument(skip(self, payload), fields(items = payload.items.len(), total = %payload.total_amount))]
    pub async fn create_order(
        &self,
        payload: CreateOrderPayload,
    ) -> Result<JoinHandle<Resolution>, OrderError> {
        debug!(?payload, "create_order called");
        let ticket = self
            .begin(OrderIntent::Create, OrderAction::CreateRequested)
            .await?;
        info!(generation = ticket.generation, "Submitting order");

        let api = Arc::clone(&self.api);
        Ok(spawn_worker(
            self.inner.clone(),
            ticket,
            async move { api.create_order(&payload).await },
            |result: Result<OrderRecord, ApiError>| match result {
                Ok(order) => {
                    info!(order_id = %order.order_id, "Order created");
                    OrderAction::CreateSucceeded(order)
                }
                Err(e) => {
                    warn!(error = %e, "Order creation failed");
                    OrderAction::CreateFailed(e.user_message(CREATE_FAILED))
                }
            },
        ))
    }

    /// Fetches the order history, replacing the local list on success.
    #[instrument(skip(self))]
    pub async fn list_orders(&self) -> Result<JoinHandle<Resolution>, OrderError> {
        let ticket = self
            .begin(OrderIntent::List, OrderAction::ListRequested)
            .await?;

        let api = Arc::clone(&self.api);
        Ok(spawn_worker(
            self.inner.clone(),
            ticket,
            async move { api.list_orders().await },
            |result: Result<Vec<OrderRecord>, ApiError>| match result {
                Ok(orders) => {
                    debug!(count = orders.len(), "Orders fetched");
                    OrderAction::ListSucceeded(orders)
                }
                Err(e) => {
                    warn!(error = %e, "Fetching orders failed");
                    OrderAction::ListFailed(e.user_message(LIST_FAILED))
                }
            },
        ))
    }

    /// Fetches one order into `current_order`. The current order is cleared while it loads.
    #[instrument(skip(self))]
    pub async fn get_order(&self, order_id: &str) -> Result<JoinHandle<Resolution>, OrderError> {
        let order_id = order_id.to_string();
        let ticket = self
            .begin(
                OrderIntent::Detail,
                OrderAction::DetailRequested(order_id.clone()),
            )
            .await?;

        let api = Arc::clone(&self.api);
        Ok(spawn_worker(
            self.inner.clone(),
            ticket,
            async move { api.get_order(&order_id).await },
            |result: Result<OrderRecord, ApiError>| match result {
                Ok(order) => OrderAction::DetailSucceeded(order),
                Err(e) => {
                    warn!(error = %e, "Fetching order failed");
                    OrderAction::DetailFailed(e.user_message(DETAIL_FAILED))
                }
            },
        ))
    }

    /// Drops the current order, e.g. after a confirmation has been shown.
    #[instrument(skip(self))]
    pub async fn clear_current(&self) -> Result<(), OrderError> {
        self.inner
            .dispatch(OrderAction::ClearCurrent)
            .await
            .map_err(Self::map_error)
    }
}

#[async_trait]
impl StoreAccess<OrderState> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &StoreClient<OrderState> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        OrderError::StoreUnavailable(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockApi;
    use crate::framework::mock::{create_mock_client, expect_begin, expect_resolve};
    use crate::framework::StoreRequest;
    use tokio::sync::mpsc;

    fn client(api: &MockApi) -> (OrderClient, mpsc::Receiver<StoreRequest<OrderState>>) {
        let (inner, receiver) = create_mock_client::<OrderState>(10);
        (OrderClient::new(inner, Arc::new(api.clone())), receiver)
    }

    #[tokio::test]
    async fn list_orders_resolves_with_the_fetched_list() {
        let api = MockApi::new();
        api.expect_list_orders()
            .return_ok(vec![OrderRecord::new("a"), OrderRecord::new("b")]);
        let (client, mut receiver) = client(&api);

        let request = tokio::spawn(async move { client.list_orders().await });

        let (kind, action, respond_to) = expect_begin(&mut receiver).await.unwrap();
        assert_eq!(kind, OrderIntent::List);
        assert_eq!(action, OrderAction::ListRequested);
        let ticket = Ticket { kind, generation: 1 };
        respond_to.send(ticket).unwrap();
        let worker = request.await.unwrap().unwrap();

        let (resolved, action, respond_to) = expect_resolve(&mut receiver).await.unwrap();
        assert_eq!(resolved, ticket);
        assert_eq!(
            action,
            OrderAction::ListSucceeded(vec![OrderRecord::new("a"), OrderRecord::new("b")])
        );
        respond_to.send(true).unwrap();

        assert_eq!(worker.await.unwrap(), Resolution::Applied);
        api.verify();
    }

    #[tokio::test]
    async fn failure_message_prefers_the_server() {
        let api = MockApi::new();
        api.expect_create_order().return_err(ApiError::Status {
            status: 400,
            message: Some("Invalid customer".to_string()),
        });
        let (client, mut receiver) = client(&api);

        let payload = CreateOrderPayload {
            customer: Default::default(),
            items: Vec::new(),
            total_amount: Default::default(),
            payment: crate::model::PaymentRequest {
                payment_method: "PayPal".to_string(),
                credit_card: None,
            },
        };
        let request = tokio::spawn(async move { client.create_order(payload).await });

        let (kind, _, respond_to) = expect_begin(&mut receiver).await.unwrap();
        respond_to.send(Ticket { kind, generation: 1 }).unwrap();
        let worker = request.await.unwrap().unwrap();

        let (_, action, respond_to) = expect_resolve(&mut receiver).await.unwrap();
        assert_eq!(action, OrderAction::CreateFailed("Invalid customer".to_string()));
        respond_to.send(true).unwrap();
        assert_eq!(worker.await.unwrap(), Resolution::Applied);
    }

    #[tokio::test]
    async fn superseded_detail_is_reported() {
        let api = MockApi::new();
        api.expect_get_order("A").return_ok(OrderRecord::new("A"));
        let (client, mut receiver) = client(&api);

        let request = tokio::spawn(async move { client.get_order("A").await });

        let (kind, action, respond_to) = expect_begin(&mut receiver).await.unwrap();
        assert_eq!(kind, OrderIntent::Detail);
        assert_eq!(action, OrderAction::DetailRequested("A".to_string()));
        respond_to.send(Ticket { kind, generation: 1 }).unwrap();
        let worker = request.await.unwrap().unwrap();

        let (_, _, respond_to) = expect_resolve(&mut receiver).await.unwrap();
        respond_to.send(false).unwrap();
        assert_eq!(worker.await.unwrap(), Resolution::Superseded);
    }

    #[tokio::test]
    async fn worker_reports_a_vanished_store() {
        let api = MockApi::new();
        api.expect_get_order("A").return_err(ApiError::Network("reset".to_string()));
        let (client, mut receiver) = client(&api);

        let request = tokio::spawn(async move { client.get_order("A").await });
        let (kind, _, respond_to) = expect_begin(&mut receiver).await.unwrap();
        respond_to.send(Ticket { kind, generation: 1 }).unwrap();
        let worker = request.await.unwrap().unwrap();

        drop(receiver);
        assert_eq!(worker.await.unwrap(), Resolution::StoreClosed);
    }
}

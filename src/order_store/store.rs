use super::state::OrderState;
use crate::framework::Store;
use crate::model::OrderRecord;

/// The asynchronous intents of the order store. Each kind has its own generation counter, so
/// a new detail fetch supersedes an older detail fetch but not a pending list fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderIntent {
    Create,
    List,
    Detail,
}

#[derive(Debug, Clone, PartialEq)]
pub enum OrderAction {
    CreateRequested,
    CreateSucceeded(OrderRecord),
    CreateFailed(String),
    ListRequested,
    ListSucceeded(Vec<OrderRecord>),
    ListFailed(String),
    /// Carries the requested id for the logs; the state does not keep it.
    DetailRequested(String),
    DetailSucceeded(OrderRecord),
    DetailFailed(String),
    ClearCurrent,
}

impl Store for OrderState {
    const NAME: &'static str = "orders";
    type Action = OrderAction;
    type Kind = OrderIntent;
    type Context = ();

    fn reduce(&mut self, action: OrderAction, _: &()) {
        match action {
            OrderAction::CreateRequested => self.request_create(),
            OrderAction::CreateSucceeded(order) => self.resolve_create_success(order),
            OrderAction::CreateFailed(message) => self.resolve_create_failure(message),
            OrderAction::ListRequested => self.request_list(),
            OrderAction::ListSucceeded(orders) => self.resolve_list_success(orders),
            OrderAction::ListFailed(message) => self.resolve_list_failure(message),
            OrderAction::DetailRequested(_) => self.request_detail(),
            OrderAction::DetailSucceeded(order) => self.resolve_detail_success(order),
            OrderAction::DetailFailed(message) => self.resolve_detail_failure(message),
            OrderAction::ClearCurrent => self.clear_current(),
        }
    }
}

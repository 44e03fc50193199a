use async_trait::async_trait;
use crate::domain::{OrderDraft, OrderReceipt};
use crate::order_actor::OrderError;

/// Anything that can accept a finished order.
///
/// One call per submission. Implementations must not retry on their own.
#[async_trait]
pub trait OrderGateway: Send + Sync {
    async fn place_order(&self, draft: OrderDraft) -> Result<OrderReceipt, OrderError>;
}

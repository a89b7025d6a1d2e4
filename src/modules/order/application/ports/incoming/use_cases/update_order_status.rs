use async_trait::async_trait;
use uuid::Uuid;

use crate::order::application::ports::outgoing::OrderRecord;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UpdateOrderStatusError {
    #[error("unknown order status: {0}")]
    InvalidStatus(String),

    #[error("Order not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateOrderStatusUseCase: Send + Sync {
    async fn execute(
        &self,
        order_id: Uuid,
        status: &str,
    ) -> Result<OrderRecord, UpdateOrderStatusError>;
}

use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::order::application::domain::entities::OrderStatus;
use crate::order::application::ports::incoming::use_cases::{
    UpdateOrderStatusError, UpdateOrderStatusUseCase,
};
use crate::order::application::ports::outgoing::{
    OrderRecord, OrderRepository, OrderRepositoryError,
};

impl From<OrderRepositoryError> for UpdateOrderStatusError {
    fn from(e: OrderRepositoryError) -> Self {
        match e {
            OrderRepositoryError::NotFound => UpdateOrderStatusError::NotFound,
            OrderRepositoryError::DatabaseError(msg) => {
                UpdateOrderStatusError::RepositoryError(msg)
            }
        }
    }
}

pub struct UpdateOrderStatusService<R>
where
    R: OrderRepository,
{
    repository: R,
}

impl<R> UpdateOrderStatusService<R>
where
    R: OrderRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> UpdateOrderStatusUseCase for UpdateOrderStatusService<R>
where
    R: OrderRepository + Send + Sync,
{
    async fn execute(
        &self,
        order_id: Uuid,
        status: &str,
    ) -> Result<OrderRecord, UpdateOrderStatusError> {
        let status: OrderStatus = status
            .trim()
            .parse()
            .map_err(|_| UpdateOrderStatusError::InvalidStatus(status.to_string()))?;

        let order = self.repository.update_status(order_id, status).await?;
        info!(order_id = %order_id, status = %status, "order status updated");
        Ok(order)
    }
}

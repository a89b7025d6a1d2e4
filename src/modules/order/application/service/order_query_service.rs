use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::{UserId, UserRole};
use crate::order::application::ports::incoming::use_cases::{
    GetOrderUseCase, ListAllOrdersUseCase, ListCustomerOrdersUseCase, OrderQueryUseCaseError,
    Requester,
};
use crate::order::application::ports::outgoing::{OrderDetails, OrderQuery, OrderQueryError};
use crate::shared::pagination::{PageRequest, PageResult};

impl From<OrderQueryError> for OrderQueryUseCaseError {
    fn from(e: OrderQueryError) -> Self {
        match e {
            OrderQueryError::DatabaseError(msg) => OrderQueryUseCaseError::RepositoryError(msg),
        }
    }
}

pub struct OrderQueryService<Q>
where
    Q: OrderQuery,
{
    query: Q,
}

impl<Q> OrderQueryService<Q>
where
    Q: OrderQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetOrderUseCase for OrderQueryService<Q>
where
    Q: OrderQuery + Send + Sync,
{
    async fn execute(
        &self,
        requester: Requester,
        order_id: Uuid,
    ) -> Result<OrderDetails, OrderQueryUseCaseError> {
        let details = self
            .query
            .find_order(order_id)
            .await?
            .ok_or(OrderQueryUseCaseError::NotFound)?;

        if requester.role != UserRole::Admin && details.order.user_id != requester.user_id {
            return Err(OrderQueryUseCaseError::NotFound);
        }
        Ok(details)
    }
}

#[async_trait]
impl<Q> ListCustomerOrdersUseCase for OrderQueryService<Q>
where
    Q: OrderQuery + Send + Sync,
{
    async fn execute(
        &self,
        user_id: UserId,
        page: PageRequest,
    ) -> Result<PageResult<OrderDetails>, OrderQueryUseCaseError> {
        Ok(self.query.list_orders(Some(user_id), page).await?)
    }
}

#[async_trait]
impl<Q> ListAllOrdersUseCase for OrderQueryService<Q>
where
    Q: OrderQuery + Send + Sync,
{
    async fn execute(
        &self,
        page: PageRequest,
    ) -> Result<PageResult<OrderDetails>, OrderQueryUseCaseError> {
        Ok(self.query.list_orders(None, page).await?)
    }
}

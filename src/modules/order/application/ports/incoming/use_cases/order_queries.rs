use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::{UserId, UserRole};
use crate::order::application::ports::outgoing::OrderDetails;
use crate::shared::pagination::{PageRequest, PageResult};

/// Who is asking; decides which orders are visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Requester {
    pub user_id: UserId,
    pub role: UserRole,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OrderQueryUseCaseError {
    #[error("Order not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetOrderUseCase: Send + Sync {
    /// Admins see any order; everyone else only their own. Someone else's
    /// order is reported as missing.
    async fn execute(
        &self,
        requester: Requester,
        order_id: Uuid,
    ) -> Result<OrderDetails, OrderQueryUseCaseError>;
}

#[async_trait]
pub trait ListCustomerOrdersUseCase: Send + Sync {
    async fn execute(
        &self,
        user_id: UserId,
        page: PageRequest,
    ) -> Result<PageResult<OrderDetails>, OrderQueryUseCaseError>;
}

#[async_trait]
pub trait ListAllOrdersUseCase: Send + Sync {
    async fn execute(
        &self,
        page: PageRequest,
    ) -> Result<PageResult<OrderDetails>, OrderQueryUseCaseError>;
}

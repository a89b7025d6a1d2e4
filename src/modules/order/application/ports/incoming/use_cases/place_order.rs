use async_trait::async_trait;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::order::application::domain::entities::RecipientInfo;
use crate::order::application::ports::outgoing::OrderDetails;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceOrderInput {
    pub recipient: RecipientInfo,
    pub total_amount: Decimal,
    pub payment_method: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlaceOrderError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("User not found")]
    UserNotFound,

    #[error("Cart is empty")]
    EmptyCart,

    #[error("Some products in the cart are no longer available")]
    ProductUnavailable(Vec<Uuid>),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait PlaceOrderUseCase: Send + Sync {
    async fn execute(
        &self,
        user_id: UserId,
        input: PlaceOrderInput,
    ) -> Result<OrderDetails, PlaceOrderError>;
}

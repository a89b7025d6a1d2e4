use async_trait::async_trait;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::order::application::domain::entities::RecipientInfo;
use crate::order::application::ports::outgoing::OrderDetails;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceOrderCommand {
    pub user_id: UserId,
    pub recipient: RecipientInfo,
    pub total_amount: Decimal,
    pub payment_method: String,
    /// When false an empty cart aborts the checkout.
    pub allow_empty_cart: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CheckoutError {
    #[error("User not found")]
    UserNotFound,

    #[error("Cart is empty")]
    EmptyCart,

    #[error("Products no longer available: {0:?}")]
    ProductUnavailable(Vec<Uuid>),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Converts the user's cart into an order atomically: either the order, all
/// of its items and the removal of the consumed cart lines are committed
/// together, or nothing is.
#[async_trait]
pub trait OrderTransaction: Send + Sync {
    async fn place_order(&self, command: PlaceOrderCommand)
        -> Result<OrderDetails, CheckoutError>;
}

use async_trait::async_trait;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::cart::application::ports::outgoing::CartItemRecord;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CartError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("Product not found")]
    ProductNotFound,

    #[error("Cart item not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddCartItemInput {
    pub product_id: Uuid,
    pub quantity: i32,
    pub unit_price: Decimal,
}

//
// ──────────────────────────────────────────────────────────
// Use case traits
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait ListCartItemsUseCase: Send + Sync {
    async fn execute(&self, user_id: UserId) -> Result<Vec<CartItemRecord>, CartError>;
}

#[async_trait]
pub trait AddCartItemUseCase: Send + Sync {
    async fn execute(
        &self,
        user_id: UserId,
        input: AddCartItemInput,
    ) -> Result<CartItemRecord, CartError>;
}

#[async_trait]
pub trait UpdateCartItemUseCase: Send + Sync {
    async fn execute(
        &self,
        user_id: UserId,
        item_id: Uuid,
        quantity: i32,
    ) -> Result<CartItemRecord, CartError>;
}

#[async_trait]
pub trait RemoveCartItemUseCase: Send + Sync {
    async fn execute(&self, user_id: UserId, item_id: Uuid) -> Result<(), CartError>;
}

#[async_trait]
pub trait ClearCartUseCase: Send + Sync {
    /// Returns how many lines were removed; clearing an empty cart yields 0.
    async fn execute(&self, user_id: UserId) -> Result<u64, CartError>;
}

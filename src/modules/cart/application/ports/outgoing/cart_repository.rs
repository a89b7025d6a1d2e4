use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;

/// One line in a customer's cart. `unit_price` is whatever the client sent
/// when the line was added; checkout copies it verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct CartItemRecord {
    pub id: Uuid,
    pub user_id: UserId,
    pub product_id: Uuid,
    pub quantity: i32,
    #[schema(value_type = String, example = "10.0000")]
    pub unit_price: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCartItem {
    pub user_id: UserId,
    pub product_id: Uuid,
    pub quantity: i32,
    pub unit_price: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CartRepositoryError {
    #[error("Product does not exist")]
    ProductNotFound,

    #[error("Cart item not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Every method is scoped to the owner; a row belonging to someone else is
/// indistinguishable from a missing one.
#[async_trait]
pub trait CartRepository: Send + Sync {
    async fn add_item(&self, item: NewCartItem) -> Result<CartItemRecord, CartRepositoryError>;

    async fn update_quantity(
        &self,
        user_id: UserId,
        item_id: Uuid,
        quantity: i32,
    ) -> Result<CartItemRecord, CartRepositoryError>;

    async fn remove_item(&self, user_id: UserId, item_id: Uuid) -> Result<(), CartRepositoryError>;

    /// Returns the number of removed rows.
    async fn clear(&self, user_id: UserId) -> Result<u64, CartRepositoryError>;

    /// Oldest line first.
    async fn list_items(&self, user_id: UserId) -> Result<Vec<CartItemRecord>, CartRepositoryError>;
}

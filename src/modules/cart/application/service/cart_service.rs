use async_trait::async_trait;
use tracing::{debug, info};
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::cart::application::ports::incoming::use_cases::{
    AddCartItemInput, AddCartItemUseCase, CartError, ClearCartUseCase, ListCartItemsUseCase,
    RemoveCartItemUseCase, UpdateCartItemUseCase,
};
use crate::cart::application::ports::outgoing::{
    CartItemRecord, CartRepository, CartRepositoryError, NewCartItem,
};
use crate::shared::money::check_money;

pub const MAX_LINE_QUANTITY: i32 = 10_000;

impl From<CartRepositoryError> for CartError {
    fn from(e: CartRepositoryError) -> Self {
        match e {
            CartRepositoryError::ProductNotFound => CartError::ProductNotFound,
            CartRepositoryError::NotFound => CartError::NotFound,
            CartRepositoryError::DatabaseError(msg) => CartError::RepositoryError(msg),
        }
    }
}

fn validate_quantity(quantity: i32) -> Result<(), CartError> {
    if quantity <= 0 {
        return Err(CartError::InvalidInput(
            "quantity must be greater than zero".to_string(),
        ));
    }
    if quantity > MAX_LINE_QUANTITY {
        return Err(CartError::InvalidInput(format!(
            "quantity must not exceed {}",
            MAX_LINE_QUANTITY
        )));
    }
    Ok(())
}

pub struct CartService<R>
where
    R: CartRepository,
{
    repository: R,
}

impl<R> CartService<R>
where
    R: CartRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> ListCartItemsUseCase for CartService<R>
where
    R: CartRepository + Send + Sync,
{
    async fn execute(&self, user_id: UserId) -> Result<Vec<CartItemRecord>, CartError> {
        Ok(self.repository.list_items(user_id).await?)
    }
}

#[async_trait]
impl<R> AddCartItemUseCase for CartService<R>
where
    R: CartRepository + Send + Sync,
{
    async fn execute(
        &self,
        user_id: UserId,
        input: AddCartItemInput,
    ) -> Result<CartItemRecord, CartError> {
        validate_quantity(input.quantity)?;
        check_money(input.unit_price)
            .map_err(|e| CartError::InvalidInput(format!("unit_price {}", e)))?;

        let item = self
            .repository
            .add_item(NewCartItem {
                user_id,
                product_id: input.product_id,
                quantity: input.quantity,
                unit_price: input.unit_price,
            })
            .await?;

        debug!(user_id = %user_id, item_id = %item.id, product_id = %item.product_id, "cart item added");
        Ok(item)
    }
}

#[async_trait]
impl<R> UpdateCartItemUseCase for CartService<R>
where
    R: CartRepository + Send + Sync,
{
    async fn execute(
        &self,
        user_id: UserId,
        item_id: Uuid,
        quantity: i32,
    ) -> Result<CartItemRecord, CartError> {
        validate_quantity(quantity)?;
        Ok(self
            .repository
            .update_quantity(user_id, item_id, quantity)
            .await?)
    }
}

#[async_trait]
impl<R> RemoveCartItemUseCase for CartService<R>
where
    R: CartRepository + Send + Sync,
{
    async fn execute(&self, user_id: UserId, item_id: Uuid) -> Result<(), CartError> {
        Ok(self.repository.remove_item(user_id, item_id).await?)
    }
}

#[async_trait]
impl<R> ClearCartUseCase for CartService<R>
where
    R: CartRepository + Send + Sync,
{
    async fn execute(&self, user_id: UserId) -> Result<u64, CartError> {
        let removed = self.repository.clear(user_id).await?;
        info!(user_id = %user_id, removed, "cart cleared");
        Ok(removed)
    }
}

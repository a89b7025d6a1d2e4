use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ProductRecord {
    pub id: Uuid,
    pub category_id: Uuid,
    /// Filled on reads that join the category
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_name: Option<String>,
    pub name: String,
    pub description: String,
    #[schema(value_type = String, example = "12.5000")]
    pub price: Decimal,
    pub stock_quantity: i32,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductData {
    pub category_id: Uuid,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub stock_quantity: i32,
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProductRepositoryError {
    #[error("Category does not exist")]
    CategoryNotFound,

    #[error("Product not found")]
    NotFound,

    #[error("Product is referenced by existing orders")]
    InUse,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn create_product(&self, data: ProductData)
        -> Result<ProductRecord, ProductRepositoryError>;

    async fn update_product(
        &self,
        id: Uuid,
        data: ProductData,
    ) -> Result<ProductRecord, ProductRepositoryError>;

    async fn delete_product(&self, id: Uuid) -> Result<(), ProductRepositoryError>;
}

use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::catalog::application::ports::incoming::use_cases::{
    CreateProductUseCase, DeleteProductUseCase, ProductError, UpdateProductUseCase,
};
use crate::catalog::application::ports::outgoing::{
    ProductData, ProductRecord, ProductRepository, ProductRepositoryError,
};
use crate::shared::money::check_money;

impl From<ProductRepositoryError> for ProductError {
    fn from(e: ProductRepositoryError) -> Self {
        match e {
            ProductRepositoryError::CategoryNotFound => ProductError::CategoryNotFound,
            ProductRepositoryError::NotFound => ProductError::NotFound,
            ProductRepositoryError::InUse => ProductError::InUse,
            ProductRepositoryError::DatabaseError(msg) => ProductError::RepositoryError(msg),
        }
    }
}

pub(crate) fn normalize_product(data: ProductData) -> Result<ProductData, ProductError> {
    let name = data.name.trim().to_string();
    if name.is_empty() {
        return Err(ProductError::InvalidInput(
            "product name is required".to_string(),
        ));
    }
    check_money(data.price).map_err(|e| ProductError::InvalidInput(format!("price {}", e)))?;
    if data.stock_quantity < 0 {
        return Err(ProductError::InvalidInput(
            "stock_quantity must not be negative".to_string(),
        ));
    }

    let image_url = data
        .image_url
        .map(|u| u.trim().to_string())
        .filter(|u| !u.is_empty());

    Ok(ProductData {
        name,
        description: data.description.trim().to_string(),
        image_url,
        ..data
    })
}

pub struct ProductCommandService<R>
where
    R: ProductRepository,
{
    repository: R,
}

impl<R> ProductCommandService<R>
where
    R: ProductRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CreateProductUseCase for ProductCommandService<R>
where
    R: ProductRepository + Send + Sync,
{
    async fn execute(&self, data: ProductData) -> Result<ProductRecord, ProductError> {
        let data = normalize_product(data)?;
        let product = self.repository.create_product(data).await?;
        info!(product_id = %product.id, category_id = %product.category_id, "product created");
        Ok(product)
    }
}

#[async_trait]
impl<R> UpdateProductUseCase for ProductCommandService<R>
where
    R: ProductRepository + Send + Sync,
{
    async fn execute(&self, id: Uuid, data: ProductData) -> Result<ProductRecord, ProductError> {
        let data = normalize_product(data)?;
        Ok(self.repository.update_product(id, data).await?)
    }
}

#[async_trait]
impl<R> DeleteProductUseCase for ProductCommandService<R>
where
    R: ProductRepository + Send + Sync,
{
    async fn execute(&self, id: Uuid) -> Result<(), ProductError> {
        self.repository.delete_product(id).await?;
        info!(product_id = %id, "product deleted");
        Ok(())
    }
}

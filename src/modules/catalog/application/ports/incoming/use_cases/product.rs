use async_trait::async_trait;
use uuid::Uuid;

use crate::catalog::application::ports::outgoing::{ProductData, ProductRecord};
use crate::shared::pagination::{PageRequest, PageResult};

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProductError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("Category does not exist")]
    CategoryNotFound,

    #[error("Product not found")]
    NotFound,

    #[error("Product is referenced by existing orders")]
    InUse,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Use case traits
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait ListProductsUseCase: Send + Sync {
    async fn execute(
        &self,
        name: Option<String>,
        page: PageRequest,
    ) -> Result<PageResult<ProductRecord>, ProductError>;
}

#[async_trait]
pub trait GetProductUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<ProductRecord, ProductError>;
}

#[async_trait]
pub trait CreateProductUseCase: Send + Sync {
    async fn execute(&self, data: ProductData) -> Result<ProductRecord, ProductError>;
}

#[async_trait]
pub trait UpdateProductUseCase: Send + Sync {
    async fn execute(&self, id: Uuid, data: ProductData) -> Result<ProductRecord, ProductError>;
}

#[async_trait]
pub trait DeleteProductUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<(), ProductError>;
}

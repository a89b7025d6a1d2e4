use async_trait::async_trait;
use uuid::Uuid;

use crate::catalog::application::ports::incoming::use_cases::{
    CategoryError, GetProductUseCase, ListCategoriesUseCase, ListProductsUseCase, ProductError,
};
use crate::catalog::application::ports::outgoing::{CatalogQuery, CategoryRecord, ProductRecord};
use crate::shared::pagination::{PageRequest, PageResult};

/// Public read side of the catalog.
pub struct CatalogQueryService<Q>
where
    Q: CatalogQuery,
{
    query: Q,
}

impl<Q> CatalogQueryService<Q>
where
    Q: CatalogQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListCategoriesUseCase for CatalogQueryService<Q>
where
    Q: CatalogQuery + Send + Sync,
{
    async fn execute(
        &self,
        name: Option<String>,
        page: PageRequest,
    ) -> Result<PageResult<CategoryRecord>, CategoryError> {
        self.query
            .list_categories(name, page)
            .await
            .map_err(|e| CategoryError::RepositoryError(e.to_string()))
    }
}

#[async_trait]
impl<Q> ListProductsUseCase for CatalogQueryService<Q>
where
    Q: CatalogQuery + Send + Sync,
{
    async fn execute(
        &self,
        name: Option<String>,
        page: PageRequest,
    ) -> Result<PageResult<ProductRecord>, ProductError> {
        self.query
            .list_products(name, page)
            .await
            .map_err(|e| ProductError::RepositoryError(e.to_string()))
    }
}

#[async_trait]
impl<Q> GetProductUseCase for CatalogQueryService<Q>
where
    Q: CatalogQuery + Send + Sync,
{
    async fn execute(&self, id: Uuid) -> Result<ProductRecord, ProductError> {
        self.query
            .find_product(id)
            .await
            .map_err(|e| ProductError::RepositoryError(e.to_string()))?
            .ok_or(ProductError::NotFound)
    }
}

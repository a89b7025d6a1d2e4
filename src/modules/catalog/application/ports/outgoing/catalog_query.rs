use async_trait::async_trait;
use std::collections::HashSet;
use uuid::Uuid;

use super::category_repository::CategoryRecord;
use super::product_repository::ProductRecord;
use crate::shared::pagination::{PageRequest, PageResult};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait CatalogQuery: Send + Sync {
    async fn list_categories(
        &self,
        name: Option<String>,
        page: PageRequest,
    ) -> Result<PageResult<CategoryRecord>, CatalogQueryError>;

    /// Products ordered by name, each carrying its category name.
    async fn list_products(
        &self,
        name: Option<String>,
        page: PageRequest,
    ) -> Result<PageResult<ProductRecord>, CatalogQueryError>;

    async fn find_product(&self, id: Uuid) -> Result<Option<ProductRecord>, CatalogQueryError>;
}

/// Read contract other modules rely on before referencing products.
#[async_trait]
pub trait CatalogReader: Send + Sync {
    /// The subset of `ids` that still exist.
    async fn existing_product_ids(&self, ids: &[Uuid])
        -> Result<HashSet<Uuid>, CatalogQueryError>;
}

use async_trait::async_trait;
use uuid::Uuid;

use crate::catalog::application::ports::outgoing::{CategoryData, CategoryRecord};
use crate::shared::pagination::{PageRequest, PageResult};

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CategoryError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("Category name already exists")]
    NameAlreadyExists,

    #[error("Category not found")]
    NotFound,

    #[error("Category still has products")]
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
pub trait ListCategoriesUseCase: Send + Sync {
    async fn execute(
        &self,
        name: Option<String>,
        page: PageRequest,
    ) -> Result<PageResult<CategoryRecord>, CategoryError>;
}

#[async_trait]
pub trait CreateCategoryUseCase: Send + Sync {
    async fn execute(&self, data: CategoryData) -> Result<CategoryRecord, CategoryError>;
}

#[async_trait]
pub trait UpdateCategoryUseCase: Send + Sync {
    async fn execute(&self, id: Uuid, data: CategoryData) -> Result<CategoryRecord, CategoryError>;
}

#[async_trait]
pub trait DeleteCategoryUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<(), CategoryError>;
}

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct CategoryRecord {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryData {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CategoryRepositoryError {
    #[error("Category name already exists")]
    NameAlreadyExists,

    #[error("Category not found")]
    NotFound,

    #[error("Category still has products")]
    InUse,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn create_category(
        &self,
        data: CategoryData,
    ) -> Result<CategoryRecord, CategoryRepositoryError>;

    async fn update_category(
        &self,
        id: Uuid,
        data: CategoryData,
    ) -> Result<CategoryRecord, CategoryRepositoryError>;

    async fn delete_category(&self, id: Uuid) -> Result<(), CategoryRepositoryError>;
}

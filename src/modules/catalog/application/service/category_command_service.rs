use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::catalog::application::ports::incoming::use_cases::{
    CategoryError, CreateCategoryUseCase, DeleteCategoryUseCase, UpdateCategoryUseCase,
};
use crate::catalog::application::ports::outgoing::{
    CategoryData, CategoryRecord, CategoryRepository, CategoryRepositoryError,
};

impl From<CategoryRepositoryError> for CategoryError {
    fn from(e: CategoryRepositoryError) -> Self {
        match e {
            CategoryRepositoryError::NameAlreadyExists => CategoryError::NameAlreadyExists,
            CategoryRepositoryError::NotFound => CategoryError::NotFound,
            CategoryRepositoryError::InUse => CategoryError::InUse,
            CategoryRepositoryError::DatabaseError(msg) => CategoryError::RepositoryError(msg),
        }
    }
}

fn normalize(data: CategoryData) -> Result<CategoryData, CategoryError> {
    let name = data.name.trim().to_string();
    if name.is_empty() {
        return Err(CategoryError::InvalidInput(
            "category name is required".to_string(),
        ));
    }

    Ok(CategoryData {
        name,
        description: data.description.trim().to_string(),
    })
}

/// Admin-side writes on categories.
pub struct CategoryCommandService<R>
where
    R: CategoryRepository,
{
    repository: R,
}

impl<R> CategoryCommandService<R>
where
    R: CategoryRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CreateCategoryUseCase for CategoryCommandService<R>
where
    R: CategoryRepository + Send + Sync,
{
    async fn execute(&self, data: CategoryData) -> Result<CategoryRecord, CategoryError> {
        let data = normalize(data)?;
        let category = self.repository.create_category(data).await?;
        info!(category_id = %category.id, name = %category.name, "category created");
        Ok(category)
    }
}

#[async_trait]
impl<R> UpdateCategoryUseCase for CategoryCommandService<R>
where
    R: CategoryRepository + Send + Sync,
{
    async fn execute(&self, id: Uuid, data: CategoryData) -> Result<CategoryRecord, CategoryError> {
        let data = normalize(data)?;
        Ok(self.repository.update_category(id, data).await?)
    }
}

#[async_trait]
impl<R> DeleteCategoryUseCase for CategoryCommandService<R>
where
    R: CategoryRepository + Send + Sync,
{
    async fn execute(&self, id: Uuid) -> Result<(), CategoryError> {
        self.repository.delete_category(id).await?;
        info!(category_id = %id, "category deleted");
        Ok(())
    }
}

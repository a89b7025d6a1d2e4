use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, Set};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::categories::{ActiveModel, Entity, Model};
use crate::catalog::application::ports::outgoing::{
    CategoryData, CategoryRecord, CategoryRepository, CategoryRepositoryError,
};
use crate::shared::db_error::{is_foreign_key_violation, is_unique_violation};

#[derive(Clone)]
pub struct CategoryRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CategoryRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

pub(crate) fn model_to_record(model: Model) -> CategoryRecord {
    CategoryRecord {
        id: model.id,
        name: model.name,
        description: model.description,
        created_at: model.created_at.with_timezone(&Utc),
        updated_at: model.updated_at.with_timezone(&Utc),
    }
}

fn map_db_err(e: DbErr) -> CategoryRepositoryError {
    match e {
        DbErr::RecordNotUpdated => CategoryRepositoryError::NotFound,
        ref err if is_unique_violation(err) => CategoryRepositoryError::NameAlreadyExists,
        ref err if is_foreign_key_violation(err) => CategoryRepositoryError::InUse,
        other => CategoryRepositoryError::DatabaseError(other.to_string()),
    }
}

#[async_trait]
impl CategoryRepository for CategoryRepositoryPostgres {
    async fn create_category(
        &self,
        data: CategoryData,
    ) -> Result<CategoryRecord, CategoryRepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(data.name),
            description: Set(data.description),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let inserted = model.insert(&*self.db).await.map_err(map_db_err)?;
        Ok(model_to_record(inserted))
    }

    async fn update_category(
        &self,
        id: Uuid,
        data: CategoryData,
    ) -> Result<CategoryRecord, CategoryRepositoryError> {
        let model = ActiveModel {
            id: Set(id),
            name: Set(data.name),
            description: Set(data.description),
            updated_at: Set(Utc::now().fixed_offset()),
            ..Default::default()
        };

        let updated = model.update(&*self.db).await.map_err(map_db_err)?;
        Ok(model_to_record(updated))
    }

    async fn delete_category(&self, id: Uuid) -> Result<(), CategoryRepositoryError> {
        let result = Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(CategoryRepositoryError::NotFound);
        }
        Ok(())
    }
}

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, Set};
use std::sync::Arc;
use tracing::error;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::outgoing::user_repository::{
    NewUserData, UserRecord, UserRepository, UserRepositoryError,
};
use crate::shared::db_error::is_unique_violation;

use super::sea_orm_entity::users::{ActiveModel as UserActiveModel, Entity as UserEntity};
use super::user_query_postgres::model_to_record;

#[derive(Clone, Debug)]
pub struct UserRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> UserRepositoryError {
    if is_unique_violation(&e) {
        return UserRepositoryError::EmailAlreadyExists;
    }
    UserRepositoryError::DatabaseError(e.to_string())
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn create_user(&self, data: NewUserData) -> Result<UserRecord, UserRepositoryError> {
        let now = Utc::now().fixed_offset();

        let active_user = UserActiveModel {
            id: Set(Uuid::new_v4()),
            email: Set(data.email),
            name: Set(data.name),
            password_hash: Set(data.password_hash),
            role: Set(data.role.as_str().to_string()),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let inserted = active_user.insert(&*self.db).await.map_err(map_db_err)?;

        model_to_record(inserted).map_err(|e| {
            error!(error = %e, "inserted user could not be mapped back");
            UserRepositoryError::DatabaseError(e.to_string())
        })
    }

    async fn update_password_hash(
        &self,
        user_id: UserId,
        password_hash: String,
    ) -> Result<(), UserRepositoryError> {
        let user = UserEntity::find_by_id(user_id.value())
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(UserRepositoryError::UserNotFound)?;

        let mut active_user: UserActiveModel = user.into();
        active_user.password_hash = Set(password_hash);

        active_user.update(&*self.db).await.map_err(map_db_err)?;

        Ok(())
    }
}

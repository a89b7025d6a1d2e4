use async_trait::async_trait;
use sea_orm::sea_query::{extension::postgres::PgExpr, Expr};
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};
use std::sync::Arc;

use super::sea_orm_entity::users::{Column as UserColumn, Entity as UserEntity, Model as UserModel};
use crate::auth::application::domain::entities::{UserId, UserRole};
use crate::auth::application::ports::outgoing::user_query::{
    UserCredentials, UserListFilter, UserQuery, UserQueryError,
};
use crate::auth::application::ports::outgoing::user_repository::UserRecord;
use crate::shared::pagination::{PageRequest, PageResult};

#[derive(Clone, Debug)]
pub struct UserQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

pub(crate) fn model_to_record(model: UserModel) -> Result<UserRecord, UserQueryError> {
    let role = model
        .role
        .parse::<UserRole>()
        .map_err(|e| UserQueryError::CorruptRecord(e.to_string()))?;

    Ok(UserRecord {
        id: UserId::from(model.id),
        email: model.email,
        name: model.name,
        role,
        created_at: model.created_at.with_timezone(&chrono::Utc),
        updated_at: model.updated_at.with_timezone(&chrono::Utc),
    })
}

fn db_err(e: sea_orm::DbErr) -> UserQueryError {
    UserQueryError::DatabaseError(e.to_string())
}

#[async_trait]
impl UserQuery for UserQueryPostgres {
    async fn find_by_id(&self, user_id: UserId) -> Result<Option<UserRecord>, UserQueryError> {
        let user = UserEntity::find_by_id(user_id.value())
            .one(&*self.db)
            .await
            .map_err(db_err)?;

        user.map(model_to_record).transpose()
    }

    async fn find_credentials_by_email(
        &self,
        email: &str,
    ) -> Result<Option<UserCredentials>, UserQueryError> {
        let user = UserEntity::find()
            .filter(UserColumn::Email.eq(email))
            .one(&*self.db)
            .await
            .map_err(db_err)?;

        match user {
            Some(model) => {
                let password_hash = model.password_hash.clone();
                Ok(Some(UserCredentials {
                    user: model_to_record(model)?,
                    password_hash,
                }))
            }
            None => Ok(None),
        }
    }

    async fn list_users(
        &self,
        filter: UserListFilter,
        page: PageRequest,
    ) -> Result<PageResult<UserRecord>, UserQueryError> {
        let mut query = UserEntity::find().filter(UserColumn::Role.eq(filter.role.as_str()));

        if let Some(ref name) = filter.name {
            let pattern = format!("%{}%", name);
            query = query.filter(Expr::col(UserColumn::Name).ilike(&pattern));
        }

        let query = query.order_by_asc(UserColumn::Name);

        let total = query.clone().count(&*self.db).await.map_err(db_err)?;

        let models = page.apply(query).all(&*self.db).await.map_err(db_err)?;

        let items = models
            .into_iter()
            .map(model_to_record)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(PageResult { items, total })
    }
}

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
    Set,
};
use std::sync::Arc;
use tracing::error;
use uuid::Uuid;

use super::sea_orm_entity::cart_items::{ActiveModel, Column, Entity, Model};
use crate::auth::application::domain::entities::UserId;
use crate::cart::application::ports::outgoing::{
    CartItemRecord, CartRepository, CartRepositoryError, NewCartItem,
};
use crate::shared::db_error::is_foreign_key_violation;

#[derive(Clone)]
pub struct CartRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CartRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

pub(crate) fn model_to_record(model: Model) -> CartItemRecord {
    CartItemRecord {
        id: model.id,
        user_id: UserId::from(model.user_id),
        product_id: model.product_id,
        quantity: model.quantity,
        unit_price: model.unit_price,
        created_at: model.created_at.with_timezone(&Utc),
        updated_at: model.updated_at.with_timezone(&Utc),
    }
}

fn db_error(e: DbErr) -> CartRepositoryError {
    error!(error = %e, "cart query failed");
    CartRepositoryError::DatabaseError(e.to_string())
}

#[async_trait]
impl CartRepository for CartRepositoryPostgres {
    async fn add_item(&self, item: NewCartItem) -> Result<CartItemRecord, CartRepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(item.user_id.value()),
            product_id: Set(item.product_id),
            quantity: Set(item.quantity),
            unit_price: Set(item.unit_price),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let inserted = model.insert(&*self.db).await.map_err(|e| {
            if is_foreign_key_violation(&e) {
                CartRepositoryError::ProductNotFound
            } else {
                db_error(e)
            }
        })?;

        Ok(model_to_record(inserted))
    }

    async fn update_quantity(
        &self,
        user_id: UserId,
        item_id: Uuid,
        quantity: i32,
    ) -> Result<CartItemRecord, CartRepositoryError> {
        let updated = Entity::update_many()
            .col_expr(Column::Quantity, Expr::value(quantity))
            .col_expr(Column::UpdatedAt, Expr::value(Utc::now().fixed_offset()))
            .filter(Column::Id.eq(item_id))
            .filter(Column::UserId.eq(user_id.value()))
            .exec_with_returning(&*self.db)
            .await
            .map_err(db_error)?;

        updated
            .into_iter()
            .next()
            .map(model_to_record)
            .ok_or(CartRepositoryError::NotFound)
    }

    async fn remove_item(&self, user_id: UserId, item_id: Uuid) -> Result<(), CartRepositoryError> {
        let result = Entity::delete_many()
            .filter(Column::Id.eq(item_id))
            .filter(Column::UserId.eq(user_id.value()))
            .exec(&*self.db)
            .await
            .map_err(db_error)?;

        if result.rows_affected == 0 {
            return Err(CartRepositoryError::NotFound);
        }
        Ok(())
    }

    async fn clear(&self, user_id: UserId) -> Result<u64, CartRepositoryError> {
        let result = Entity::delete_many()
            .filter(Column::UserId.eq(user_id.value()))
            .exec(&*self.db)
            .await
            .map_err(db_error)?;

        Ok(result.rows_affected)
    }

    async fn list_items(&self, user_id: UserId) -> Result<Vec<CartItemRecord>, CartRepositoryError> {
        let models = Entity::find()
            .filter(Column::UserId.eq(user_id.value()))
            .order_by_asc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(db_error)?;

        Ok(models.into_iter().map(model_to_record).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    fn model(user_id: Uuid, quantity: i32) -> Model {
        let now = Utc::now().fixed_offset();
        Model {
            id: Uuid::new_v4(),
            user_id,
            product_id: Uuid::new_v4(),
            quantity,
            unit_price: Decimal::new(1000, 2),
            created_at: now,
            updated_at: now,
        }
    }

    fn exec(rows_affected: u64) -> MockExecResult {
        MockExecResult {
            last_insert_id: 0,
            rows_affected,
        }
    }

    #[tokio::test]
    async fn test_add_item_success() {
        let owner = Uuid::new_v4();
        let row = model(owner, 2);
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![row.clone()]])
            .into_connection();

        let repo = CartRepositoryPostgres::new(Arc::new(db));
        let record = repo
            .add_item(NewCartItem {
                user_id: UserId::from(owner),
                product_id: row.product_id,
                quantity: 2,
                unit_price: row.unit_price,
            })
            .await
            .unwrap();

        assert_eq!(record.id, row.id);
        assert_eq!(record.user_id, UserId::from(owner));
        assert_eq!(record.unit_price, Decimal::new(10, 0));
    }

    #[tokio::test]
    async fn test_add_item_unknown_product() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom(
                "insert or update on table \"cart_items\" violates foreign key constraint \"fk_cart_items_product_id\""
                    .to_string(),
            )])
            .into_connection();

        let repo = CartRepositoryPostgres::new(Arc::new(db));
        let err = repo
            .add_item(NewCartItem {
                user_id: UserId::from(Uuid::new_v4()),
                product_id: Uuid::new_v4(),
                quantity: 1,
                unit_price: Decimal::ONE,
            })
            .await
            .unwrap_err();

        assert_eq!(err, CartRepositoryError::ProductNotFound);
    }

    #[tokio::test]
    async fn test_update_quantity_returns_updated_row() {
        let owner = Uuid::new_v4();
        let row = model(owner, 7);
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![row.clone()]])
            .into_connection();

        let repo = CartRepositoryPostgres::new(Arc::new(db));
        let record = repo
            .update_quantity(UserId::from(owner), row.id, 7)
            .await
            .unwrap();

        assert_eq!(record.quantity, 7);
    }

    #[tokio::test]
    async fn test_update_quantity_foreign_row_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<Model>::new()])
            .into_connection();

        let repo = CartRepositoryPostgres::new(Arc::new(db));
        let err = repo
            .update_quantity(UserId::from(Uuid::new_v4()), Uuid::new_v4(), 3)
            .await
            .unwrap_err();

        assert_eq!(err, CartRepositoryError::NotFound);
    }

    #[tokio::test]
    async fn test_remove_item_nothing_deleted() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([exec(0)])
            .into_connection();

        let repo = CartRepositoryPostgres::new(Arc::new(db));
        let err = repo
            .remove_item(UserId::from(Uuid::new_v4()), Uuid::new_v4())
            .await
            .unwrap_err();

        assert_eq!(err, CartRepositoryError::NotFound);
    }

    #[tokio::test]
    async fn test_clear_reports_removed_rows() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([exec(3), exec(0)])
            .into_connection();

        let repo = CartRepositoryPostgres::new(Arc::new(db));
        let owner = UserId::from(Uuid::new_v4());

        assert_eq!(repo.clear(owner).await.unwrap(), 3);
        assert_eq!(repo.clear(owner).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_list_items_keeps_query_order() {
        let owner = Uuid::new_v4();
        let rows = vec![model(owner, 1), model(owner, 2)];
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![rows.clone()])
            .into_connection();

        let repo = CartRepositoryPostgres::new(Arc::new(db));
        let items = repo.list_items(UserId::from(owner)).await.unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].id, rows[0].id);
        assert_eq!(items[1].quantity, 2);
    }
}

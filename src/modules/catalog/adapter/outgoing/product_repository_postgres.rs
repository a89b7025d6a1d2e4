use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, Set};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::products::{ActiveModel, Entity, Model};
use crate::catalog::application::ports::outgoing::{
    ProductData, ProductRecord, ProductRepository, ProductRepositoryError,
};
use crate::shared::db_error::is_foreign_key_violation;

#[derive(Clone)]
pub struct ProductRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProductRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

pub(crate) fn model_to_record(model: Model, category_name: Option<String>) -> ProductRecord {
    ProductRecord {
        id: model.id,
        category_id: model.category_id,
        category_name,
        name: model.name,
        description: model.description,
        price: model.price,
        stock_quantity: model.stock_quantity,
        image_url: model.image_url,
        created_at: model.created_at.with_timezone(&Utc),
        updated_at: model.updated_at.with_timezone(&Utc),
    }
}

// Writes only ever trip the category FK; deletes only the order_items FK.
fn map_write_err(e: DbErr) -> ProductRepositoryError {
    match e {
        DbErr::RecordNotUpdated => ProductRepositoryError::NotFound,
        ref err if is_foreign_key_violation(err) => ProductRepositoryError::CategoryNotFound,
        other => ProductRepositoryError::DatabaseError(other.to_string()),
    }
}

fn map_delete_err(e: DbErr) -> ProductRepositoryError {
    if is_foreign_key_violation(&e) {
        ProductRepositoryError::InUse
    } else {
        ProductRepositoryError::DatabaseError(e.to_string())
    }
}

#[async_trait]
impl ProductRepository for ProductRepositoryPostgres {
    async fn create_product(
        &self,
        data: ProductData,
    ) -> Result<ProductRecord, ProductRepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            category_id: Set(data.category_id),
            name: Set(data.name),
            description: Set(data.description),
            price: Set(data.price),
            stock_quantity: Set(data.stock_quantity),
            image_url: Set(data.image_url),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let inserted = model.insert(&*self.db).await.map_err(map_write_err)?;
        Ok(model_to_record(inserted, None))
    }

    async fn update_product(
        &self,
        id: Uuid,
        data: ProductData,
    ) -> Result<ProductRecord, ProductRepositoryError> {
        let model = ActiveModel {
            id: Set(id),
            category_id: Set(data.category_id),
            name: Set(data.name),
            description: Set(data.description),
            price: Set(data.price),
            stock_quantity: Set(data.stock_quantity),
            image_url: Set(data.image_url),
            updated_at: Set(Utc::now().fixed_offset()),
            ..Default::default()
        };

        let updated = model.update(&*self.db).await.map_err(map_write_err)?;
        Ok(model_to_record(updated, None))
    }

    async fn delete_product(&self, id: Uuid) -> Result<(), ProductRepositoryError> {
        let result = Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_delete_err)?;

        if result.rows_affected == 0 {
            return Err(ProductRepositoryError::NotFound);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    fn data(category_id: Uuid) -> ProductData {
        ProductData {
            category_id,
            name: "Mechanical Keyboard".to_string(),
            description: "Clicky".to_string(),
            price: Decimal::new(12_900, 2),
            stock_quantity: 4,
            image_url: None,
        }
    }

    fn model_from(id: Uuid, data: &ProductData) -> Model {
        let now = Utc::now().fixed_offset();
        Model {
            id,
            category_id: data.category_id,
            name: data.name.clone(),
            description: data.description.clone(),
            price: data.price,
            stock_quantity: data.stock_quantity,
            image_url: data.image_url.clone(),
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_create_product_success() {
        let id = Uuid::new_v4();
        let input = data(Uuid::new_v4());
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model_from(id, &input)]])
            .into_connection();

        let repo = ProductRepositoryPostgres::new(Arc::new(db));
        let record = repo.create_product(input.clone()).await.unwrap();

        assert_eq!(record.id, id);
        assert_eq!(record.price, input.price);
        assert_eq!(record.category_name, None);
    }

    #[tokio::test]
    async fn test_create_product_unknown_category() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom(
                "insert or update on table \"products\" violates foreign key constraint (23503)"
                    .to_string(),
            )])
            .into_connection();

        let repo = ProductRepositoryPostgres::new(Arc::new(db));
        let err = repo.create_product(data(Uuid::new_v4())).await.unwrap_err();

        assert_eq!(err, ProductRepositoryError::CategoryNotFound);
    }

    #[tokio::test]
    async fn test_update_missing_product() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<Model>::new()])
            .into_connection();

        let repo = ProductRepositoryPostgres::new(Arc::new(db));
        let err = repo
            .update_product(Uuid::new_v4(), data(Uuid::new_v4()))
            .await
            .unwrap_err();

        assert_eq!(err, ProductRepositoryError::NotFound);
    }

    #[tokio::test]
    async fn test_delete_product_referenced_by_order_items() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_errors([DbErr::Custom(
                "violates foreign key constraint \"fk_order_items_product\"".to_string(),
            )])
            .into_connection();

        let repo = ProductRepositoryPostgres::new(Arc::new(db));
        let err = repo.delete_product(Uuid::new_v4()).await.unwrap_err();

        assert_eq!(err, ProductRepositoryError::InUse);
    }

    #[tokio::test]
    async fn test_delete_missing_product() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        let repo = ProductRepositoryPostgres::new(Arc::new(db));
        let err = repo.delete_product(Uuid::new_v4()).await.unwrap_err();

        assert_eq!(err, ProductRepositoryError::NotFound);
    }
}

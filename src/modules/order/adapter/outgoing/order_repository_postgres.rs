use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, Set};
use std::sync::Arc;
use uuid::Uuid;

use super::order_query_postgres::order_to_record;
use super::sea_orm_entity::orders::ActiveModel;
use crate::order::application::domain::entities::OrderStatus;
use crate::order::application::ports::outgoing::{
    OrderRecord, OrderRepository, OrderRepositoryError,
};

#[derive(Clone)]
pub struct OrderRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl OrderRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OrderRepository for OrderRepositoryPostgres {
    async fn update_status(
        &self,
        order_id: Uuid,
        status: OrderStatus,
    ) -> Result<OrderRecord, OrderRepositoryError> {
        let model = ActiveModel {
            id: Set(order_id),
            status: Set(status.as_str().to_string()),
            updated_at: Set(Utc::now().fixed_offset()),
            ..Default::default()
        };

        let updated = model.update(&*self.db).await.map_err(|e| match e {
            DbErr::RecordNotUpdated => OrderRepositoryError::NotFound,
            other => OrderRepositoryError::DatabaseError(other.to_string()),
        })?;

        order_to_record(updated).map_err(OrderRepositoryError::DatabaseError)
    }
}

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder,
};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::error;
use uuid::Uuid;

use super::sea_orm_entity::{order_items, orders};
use crate::auth::application::domain::entities::UserId;
use crate::order::application::domain::entities::OrderStatus;
use crate::order::application::ports::outgoing::{
    OrderDetails, OrderItemRecord, OrderQuery, OrderQueryError, OrderRecord,
};
use crate::shared::pagination::{PageRequest, PageResult};

#[derive(Clone)]
pub struct OrderQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl OrderQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

//
// ──────────────────────────────────────────────────────────
// Row mapping
// ──────────────────────────────────────────────────────────
//

/// Fails only when the stored status is outside the closed set.
pub(crate) fn order_to_record(model: orders::Model) -> Result<OrderRecord, String> {
    let status: OrderStatus = model
        .status
        .parse()
        .map_err(|e| format!("order {}: {}", model.id, e))?;

    Ok(OrderRecord {
        id: model.id,
        user_id: UserId::from(model.user_id),
        recipient_name: model.recipient_name,
        recipient_phone: model.recipient_phone,
        recipient_email: model.recipient_email,
        recipient_address: model.recipient_address,
        total_amount: model.total_amount,
        payment_method: model.payment_method,
        status,
        created_at: model.created_at.with_timezone(&Utc),
        updated_at: model.updated_at.with_timezone(&Utc),
    })
}

pub(crate) fn item_to_record(model: order_items::Model) -> OrderItemRecord {
    OrderItemRecord {
        id: model.id,
        order_id: model.order_id,
        product_id: model.product_id,
        quantity: model.quantity,
        unit_price: model.unit_price,
        created_at: model.created_at.with_timezone(&Utc),
    }
}

fn map_db_err(e: DbErr) -> OrderQueryError {
    error!(error = %e, "order query failed");
    OrderQueryError::DatabaseError(e.to_string())
}

/// Loads the items of `rows` with one query and keeps the order of `rows`.
async fn with_items<C>(
    conn: &C,
    rows: Vec<orders::Model>,
) -> Result<Vec<OrderDetails>, OrderQueryError>
where
    C: ConnectionTrait,
{
    if rows.is_empty() {
        return Ok(vec![]);
    }

    let ids: Vec<Uuid> = rows.iter().map(|o| o.id).collect();
    let items = order_items::Entity::find()
        .filter(order_items::Column::OrderId.is_in(ids))
        .order_by_asc(order_items::Column::CreatedAt)
        .all(conn)
        .await
        .map_err(map_db_err)?;

    let mut by_order: HashMap<Uuid, Vec<OrderItemRecord>> = HashMap::new();
    for item in items {
        by_order
            .entry(item.order_id)
            .or_default()
            .push(item_to_record(item));
    }

    rows.into_iter()
        .map(|row| {
            let items = by_order.remove(&row.id).unwrap_or_default();
            let order = order_to_record(row).map_err(OrderQueryError::DatabaseError)?;
            Ok(OrderDetails { order, items })
        })
        .collect()
}

#[async_trait]
impl OrderQuery for OrderQueryPostgres {
    async fn find_order(&self, order_id: Uuid) -> Result<Option<OrderDetails>, OrderQueryError> {
        let row = orders::Entity::find_by_id(order_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        match row {
            Some(row) => Ok(with_items(&*self.db, vec![row]).await?.pop()),
            None => Ok(None),
        }
    }

    async fn list_orders(
        &self,
        owner: Option<UserId>,
        page: PageRequest,
    ) -> Result<PageResult<OrderDetails>, OrderQueryError> {
        let mut query = orders::Entity::find();

        if let Some(owner) = owner {
            query = query.filter(orders::Column::UserId.eq(owner.value()));
        }

        let query = query.order_by_desc(orders::Column::CreatedAt);

        let total = query.clone().count(&*self.db).await.map_err(map_db_err)?;
        let rows = page.apply(query).all(&*self.db).await.map_err(map_db_err)?;

        Ok(PageResult {
            items: with_items(&*self.db, rows).await?,
            total,
        })
    }
}

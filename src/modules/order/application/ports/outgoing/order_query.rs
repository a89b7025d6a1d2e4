use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::order::application::domain::entities::OrderStatus;
use crate::shared::pagination::{PageRequest, PageResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct OrderRecord {
    pub id: Uuid,
    pub user_id: UserId,
    pub recipient_name: String,
    pub recipient_phone: String,
    pub recipient_email: String,
    pub recipient_address: String,
    #[schema(value_type = String, example = "25.0000")]
    pub total_amount: Decimal,
    pub payment_method: String,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct OrderItemRecord {
    pub id: Uuid,
    pub order_id: Uuid,
    pub product_id: Uuid,
    pub quantity: i32,
    /// Price captured from the cart line; never recomputed
    #[schema(value_type = String, example = "10.0000")]
    pub unit_price: Decimal,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct OrderDetails {
    #[serde(flatten)]
    pub order: OrderRecord,
    pub items: Vec<OrderItemRecord>,
}

impl OrderDetails {
    /// Σ unit_price × quantity over the items, or `None` when it does not fit a `Decimal`.
    pub fn items_total(&self) -> Option<Decimal> {
        self.items.iter().try_fold(Decimal::ZERO, |total, item| {
            item.unit_price
                .checked_mul(Decimal::from(item.quantity))
                .and_then(|line| total.checked_add(line))
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OrderQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Reads always return orders newest first, each with its items.
#[async_trait]
pub trait OrderQuery: Send + Sync {
    async fn find_order(&self, order_id: Uuid) -> Result<Option<OrderDetails>, OrderQueryError>;

    /// `owner = None` lists every order.
    async fn list_orders(
        &self,
        owner: Option<UserId>,
        page: PageRequest,
    ) -> Result<PageResult<OrderDetails>, OrderQueryError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn details(lines: Vec<(i32, Decimal)>) -> OrderDetails {
        let order_id = Uuid::new_v4();
        let now = Utc::now();
        OrderDetails {
            order: OrderRecord {
                id: order_id,
                user_id: UserId::from(Uuid::new_v4()),
                recipient_name: "Ada".to_string(),
                recipient_phone: "555".to_string(),
                recipient_email: "ada@example.com".to_string(),
                recipient_address: "1 Main St".to_string(),
                total_amount: Decimal::ZERO,
                payment_method: "cash".to_string(),
                status: OrderStatus::Pending,
                created_at: now,
                updated_at: now,
            },
            items: lines
                .into_iter()
                .map(|(quantity, unit_price)| OrderItemRecord {
                    id: Uuid::new_v4(),
                    order_id,
                    product_id: Uuid::new_v4(),
                    quantity,
                    unit_price,
                    created_at: now,
                })
                .collect(),
        }
    }

    #[test]
    fn items_total_sums_lines() {
        let order = details(vec![(2, Decimal::new(1050, 2)), (3, Decimal::new(1, 0))]);
        assert_eq!(order.items_total(), Some(Decimal::new(24, 0)));
        assert_eq!(details(vec![]).items_total(), Some(Decimal::ZERO));
    }

    #[test]
    fn items_total_overflow_is_none() {
        let price = Decimal::from_str("999999999999999.9999").unwrap();
        let order = details(vec![(i32::MAX, price); 40_000]);
        assert_eq!(order.items_total(), None);

        assert_eq!(details(vec![(2, Decimal::MAX)]).items_total(), None);
    }
}

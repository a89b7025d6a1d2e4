use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DatabaseTransaction, DbErr, EntityTrait, IsolationLevel,
    QueryFilter, QueryOrder, QuerySelect, Set, TransactionTrait,
};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, error, warn};
use uuid::Uuid;

use super::order_query_postgres::{item_to_record, order_to_record};
use super::sea_orm_entity::{order_items, orders};
use crate::auth::adapter::outgoing::sea_orm_entity::users;
use crate::cart::adapter::outgoing::sea_orm_entity::cart_items;
use crate::catalog::adapter::outgoing::existing_product_ids;
use crate::order::application::domain::entities::OrderStatus;
use crate::order::application::ports::outgoing::{
    CheckoutError, OrderDetails, OrderTransaction, PlaceOrderCommand,
};

#[derive(Clone)]
pub struct OrderTransactionPostgres {
    db: Arc<DatabaseConnection>,
}

impl OrderTransactionPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_db_err(e: DbErr) -> CheckoutError {
        error!(error = %e, "checkout statement failed");
        CheckoutError::DatabaseError(e.to_string())
    }

    // =====================================================
    // Facade hook: lets tests supply a fake DB/txn
    // =====================================================

    async fn place_order_with_db<D: CheckoutDb>(
        db: &D,
        command: PlaceOrderCommand,
    ) -> Result<OrderDetails, CheckoutError> {
        let mut txn = db.begin().await.map_err(Self::map_db_err)?;

        match Self::checkout(&mut txn, command).await {
            Ok(details) => {
                txn.commit().await.map_err(Self::map_db_err)?;
                Ok(details)
            }
            Err(e) => {
                let _ = txn.rollback().await;
                Err(e)
            }
        }
    }

    async fn checkout<T: CheckoutTxn>(
        txn: &mut T,
        command: PlaceOrderCommand,
    ) -> Result<OrderDetails, CheckoutError> {
        let user_id = command.user_id.value();
        let now = Utc::now().fixed_offset();

        // serializes concurrent checkouts of the same user
        if !txn.lock_user(user_id).await.map_err(Self::map_db_err)? {
            return Err(CheckoutError::UserNotFound);
        }

        let order = orders::Model {
            id: Uuid::new_v4(),
            user_id,
            recipient_name: command.recipient.name,
            recipient_phone: command.recipient.phone,
            recipient_email: command.recipient.email,
            recipient_address: command.recipient.address,
            total_amount: command.total_amount,
            payment_method: command.payment_method,
            status: OrderStatus::Pending.as_str().to_string(),
            created_at: now,
            updated_at: now,
        };
        txn.insert_order(order.clone())
            .await
            .map_err(Self::map_db_err)?;

        let cart = txn
            .cart_items_for_update(user_id)
            .await
            .map_err(Self::map_db_err)?;

        if cart.is_empty() {
            if !command.allow_empty_cart {
                return Err(CheckoutError::EmptyCart);
            }
            warn!(user_id = %user_id, order_id = %order.id, "placing order from an empty cart");
        }

        let mut product_ids: Vec<Uuid> = cart.iter().map(|line| line.product_id).collect();
        product_ids.sort();
        product_ids.dedup();

        // cart_items.product_id cascades on delete, so this only trips when the
        // schema lets a line outlive its product (FK dropped or disabled).
        let existing = txn
            .existing_product_ids(&product_ids)
            .await
            .map_err(Self::map_db_err)?;
        let missing: Vec<Uuid> = product_ids
            .into_iter()
            .filter(|id| !existing.contains(id))
            .collect();
        if !missing.is_empty() {
            warn!(user_id = %user_id, missing = ?missing, "cart lines reference missing products");
            return Err(CheckoutError::ProductUnavailable(missing));
        }

        let items: Vec<order_items::Model> = cart
            .iter()
            .map(|line| order_items::Model {
                id: Uuid::new_v4(),
                order_id: order.id,
                product_id: line.product_id,
                quantity: line.quantity,
                unit_price: line.unit_price,
                created_at: now,
            })
            .collect();

        if !items.is_empty() {
            txn.insert_order_items(items.clone())
                .await
                .map_err(Self::map_db_err)?;
        }

        // only the lines read above; anything added meanwhile stays in the cart
        let consumed: Vec<Uuid> = cart.iter().map(|line| line.id).collect();
        if !consumed.is_empty() {
            let removed = txn
                .delete_cart_items(&consumed)
                .await
                .map_err(Self::map_db_err)?;
            debug!(user_id = %user_id, removed, "cart lines consumed");
        }

        Ok(OrderDetails {
            order: order_to_record(order).map_err(CheckoutError::DatabaseError)?,
            items: items.into_iter().map(item_to_record).collect(),
        })
    }
}

#[async_trait]
impl OrderTransaction for OrderTransactionPostgres {
    async fn place_order(
        &self,
        command: PlaceOrderCommand,
    ) -> Result<OrderDetails, CheckoutError> {
        // production db adapter
        let db = SeaOrmDb {
            db: self.db.clone(),
        };

        // Runs on its own task so a dropped request cannot abandon the
        // transaction halfway.
        tokio::spawn(async move { Self::place_order_with_db(&db, command).await })
            .await
            .map_err(|e| {
                error!(error = %e, "checkout task failed");
                CheckoutError::DatabaseError(e.to_string())
            })?
    }
}

// ============================================================================
// Minimal DB facade (so tests don't rely on SeaORM MockDatabase txn behavior)
// ============================================================================

#[async_trait]
trait CheckoutDb: Send + Sync {
    type Txn: CheckoutTxn;
    async fn begin(&self) -> Result<Self::Txn, DbErr>;
}

#[async_trait]
trait CheckoutTxn: Send {
    /// `SELECT … FOR UPDATE` on the user row; false when it does not exist.
    async fn lock_user(&mut self, user_id: Uuid) -> Result<bool, DbErr>;
    async fn insert_order(&mut self, order: orders::Model) -> Result<(), DbErr>;
    async fn cart_items_for_update(
        &mut self,
        user_id: Uuid,
    ) -> Result<Vec<cart_items::Model>, DbErr>;
    async fn existing_product_ids(&mut self, ids: &[Uuid]) -> Result<HashSet<Uuid>, DbErr>;
    async fn insert_order_items(&mut self, items: Vec<order_items::Model>) -> Result<(), DbErr>;
    async fn delete_cart_items(&mut self, ids: &[Uuid]) -> Result<u64, DbErr>;
    async fn commit(self) -> Result<(), DbErr>;
    async fn rollback(self) -> Result<(), DbErr>;
}

struct SeaOrmDb {
    db: Arc<DatabaseConnection>,
}

struct SeaOrmTxn {
    txn: DatabaseTransaction,
}

#[async_trait]
impl CheckoutDb for SeaOrmDb {
    type Txn = SeaOrmTxn;

    async fn begin(&self) -> Result<Self::Txn, DbErr> {
        let txn = self
            .db
            .begin_with_config(Some(IsolationLevel::ReadCommitted), None)
            .await?;
        Ok(SeaOrmTxn { txn })
    }
}

#[async_trait]
impl CheckoutTxn for SeaOrmTxn {
    async fn lock_user(&mut self, user_id: Uuid) -> Result<bool, DbErr> {
        let found = users::Entity::find_by_id(user_id)
            .select_only()
            .column(users::Column::Id)
            .lock_exclusive()
            .into_tuple::<Uuid>()
            .one(&self.txn)
            .await?;
        Ok(found.is_some())
    }

    async fn insert_order(&mut self, order: orders::Model) -> Result<(), DbErr> {
        let active = orders::ActiveModel {
            id: Set(order.id),
            user_id: Set(order.user_id),
            recipient_name: Set(order.recipient_name),
            recipient_phone: Set(order.recipient_phone),
            recipient_email: Set(order.recipient_email),
            recipient_address: Set(order.recipient_address),
            total_amount: Set(order.total_amount),
            payment_method: Set(order.payment_method),
            status: Set(order.status),
            created_at: Set(order.created_at),
            updated_at: Set(order.updated_at),
        };
        orders::Entity::insert(active)
            .exec_without_returning(&self.txn)
            .await?;
        Ok(())
    }

    async fn cart_items_for_update(
        &mut self,
        user_id: Uuid,
    ) -> Result<Vec<cart_items::Model>, DbErr> {
        cart_items::Entity::find()
            .filter(cart_items::Column::UserId.eq(user_id))
            .order_by_asc(cart_items::Column::CreatedAt)
            .lock_exclusive()
            .all(&self.txn)
            .await
    }

    async fn existing_product_ids(&mut self, ids: &[Uuid]) -> Result<HashSet<Uuid>, DbErr> {
        existing_product_ids(&self.txn, ids).await
    }

    async fn insert_order_items(&mut self, items: Vec<order_items::Model>) -> Result<(), DbErr> {
        let rows = items.into_iter().map(|item| order_items::ActiveModel {
            id: Set(item.id),
            order_id: Set(item.order_id),
            product_id: Set(item.product_id),
            quantity: Set(item.quantity),
            unit_price: Set(item.unit_price),
            created_at: Set(item.created_at),
        });
        order_items::Entity::insert_many(rows)
            .exec_without_returning(&self.txn)
            .await?;
        Ok(())
    }

    async fn delete_cart_items(&mut self, ids: &[Uuid]) -> Result<u64, DbErr> {
        let result = cart_items::Entity::delete_many()
            .filter(cart_items::Column::Id.is_in(ids.to_vec()))
            .exec(&self.txn)
            .await?;
        Ok(result.rows_affected)
    }

    async fn commit(self) -> Result<(), DbErr> {
        self.txn.commit().await
    }

    async fn rollback(self) -> Result<(), DbErr> {
        self.txn.rollback().await
    }
}

// ============================================================================
// Tests (in-memory store with copy-on-begin transactions)
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::UserId;
    use crate::order::application::domain::entities::RecipientInfo;
    use rust_decimal::Decimal;
    use std::sync::Mutex;

    #[derive(Clone, Default)]
    struct Store {
        users: HashSet<Uuid>,
        products: HashSet<Uuid>,
        cart: Vec<cart_items::Model>,
        orders: Vec<orders::Model>,
        order_items: Vec<order_items::Model>,
    }

    /// Which statement should fail, if any.
    #[derive(Clone, Copy, PartialEq, Eq)]
    enum FailAt {
        Nothing,
        InsertItems,
        DeleteCart,
        Commit,
    }

    #[derive(Clone)]
    struct FakeDb {
        committed: Arc<Mutex<Store>>,
        log: Arc<Mutex<Vec<&'static str>>>,
        fail_at: FailAt,
    }

    struct FakeTxn {
        staged: Store,
        committed: Arc<Mutex<Store>>,
        log: Arc<Mutex<Vec<&'static str>>>,
        fail_at: FailAt,
    }

    impl FakeDb {
        fn new(store: Store) -> Self {
            Self {
                committed: Arc::new(Mutex::new(store)),
                log: Arc::new(Mutex::new(Vec::new())),
                fail_at: FailAt::Nothing,
            }
        }

        fn failing_at(mut self, fail_at: FailAt) -> Self {
            self.fail_at = fail_at;
            self
        }

        fn snapshot(&self) -> Store {
            self.committed.lock().unwrap().clone()
        }

        fn log(&self) -> Vec<&'static str> {
            self.log.lock().unwrap().clone()
        }
    }

    impl FakeTxn {
        fn record(&self, step: &'static str) {
            self.log.lock().unwrap().push(step);
        }

        fn injected(&self, at: FailAt) -> Result<(), DbErr> {
            if self.fail_at == at {
                return Err(DbErr::Custom("injected failure".to_string()));
            }
            Ok(())
        }
    }

    #[async_trait]
    impl CheckoutDb for FakeDb {
        type Txn = FakeTxn;

        async fn begin(&self) -> Result<Self::Txn, DbErr> {
            self.log.lock().unwrap().push("begin");
            Ok(FakeTxn {
                staged: self.snapshot(),
                committed: self.committed.clone(),
                log: self.log.clone(),
                fail_at: self.fail_at,
            })
        }
    }

    #[async_trait]
    impl CheckoutTxn for FakeTxn {
        async fn lock_user(&mut self, user_id: Uuid) -> Result<bool, DbErr> {
            self.record("lock_user");
            Ok(self.staged.users.contains(&user_id))
        }

        async fn insert_order(&mut self, order: orders::Model) -> Result<(), DbErr> {
            self.record("insert_order");
            self.staged.orders.push(order);
            Ok(())
        }

        async fn cart_items_for_update(
            &mut self,
            user_id: Uuid,
        ) -> Result<Vec<cart_items::Model>, DbErr> {
            self.record("read_cart");
            Ok(self
                .staged
                .cart
                .iter()
                .filter(|line| line.user_id == user_id)
                .cloned()
                .collect())
        }

        async fn existing_product_ids(&mut self, ids: &[Uuid]) -> Result<HashSet<Uuid>, DbErr> {
            self.record("check_products");
            Ok(ids
                .iter()
                .filter(|id| self.staged.products.contains(id))
                .copied()
                .collect())
        }

        async fn insert_order_items(
            &mut self,
            items: Vec<order_items::Model>,
        ) -> Result<(), DbErr> {
            self.record("insert_items");
            self.injected(FailAt::InsertItems)?;
            self.staged.order_items.extend(items);
            Ok(())
        }

        async fn delete_cart_items(&mut self, ids: &[Uuid]) -> Result<u64, DbErr> {
            self.record("delete_cart");
            self.injected(FailAt::DeleteCart)?;
            let before = self.staged.cart.len();
            self.staged.cart.retain(|line| !ids.contains(&line.id));
            Ok((before - self.staged.cart.len()) as u64)
        }

        async fn commit(self) -> Result<(), DbErr> {
            self.record("commit");
            self.injected(FailAt::Commit)?;
            *self.committed.lock().unwrap() = self.staged;
            Ok(())
        }

        async fn rollback(self) -> Result<(), DbErr> {
            self.record("rollback");
            Ok(())
        }
    }

    // =====================================================
    // Fixtures
    // =====================================================

    fn line(user_id: Uuid, product_id: Uuid, quantity: i32, price: Decimal) -> cart_items::Model {
        let now = Utc::now().fixed_offset();
        cart_items::Model {
            id: Uuid::new_v4(),
            user_id,
            product_id,
            quantity,
            unit_price: price,
            created_at: now,
            updated_at: now,
        }
    }

    fn command(user_id: Uuid, total: Decimal, allow_empty_cart: bool) -> PlaceOrderCommand {
        PlaceOrderCommand {
            user_id: UserId::from(user_id),
            recipient: RecipientInfo {
                name: "Ada".to_string(),
                phone: "123456".to_string(),
                email: "ada@example.com".to_string(),
                address: "12 Analytical St".to_string(),
            },
            total_amount: total,
            payment_method: "credit_card".to_string(),
            allow_empty_cart,
        }
    }

    /// One user with `lines` cart lines over existing products.
    fn store_with_cart(user_id: Uuid, lines: Vec<(i32, Decimal)>) -> Store {
        let mut store = Store::default();
        store.users.insert(user_id);
        for (quantity, price) in lines {
            let product_id = Uuid::new_v4();
            store.products.insert(product_id);
            store.cart.push(line(user_id, product_id, quantity, price));
        }
        store
    }

    async fn place(db: &FakeDb, command: PlaceOrderCommand) -> Result<OrderDetails, CheckoutError> {
        OrderTransactionPostgres::place_order_with_db(db, command).await
    }

    // =====================================================
    // Commit paths
    // =====================================================

    #[tokio::test]
    async fn n_item_cart_becomes_one_order_and_empties() {
        let user_id = Uuid::new_v4();
        let lines: Vec<(i32, Decimal)> = (1..=5).map(|n| (n, Decimal::new(n as i64, 0))).collect();
        let db = FakeDb::new(store_with_cart(user_id, lines));

        let details = place(&db, command(user_id, Decimal::new(55, 0), true))
            .await
            .unwrap();

        let store = db.snapshot();
        assert_eq!(store.orders.len(), 1);
        assert_eq!(store.order_items.len(), 5);
        assert!(store.order_items.iter().all(|i| i.order_id == details.order.id));
        assert!(store.cart.is_empty());
        assert_eq!(details.order.status, OrderStatus::Pending);
        assert_eq!(db.log().last(), Some(&"commit"));
    }

    #[tokio::test]
    async fn two_lines_totalling_twenty_five() {
        let user_id = Uuid::new_v4();
        let db = FakeDb::new(store_with_cart(
            user_id,
            vec![(2, Decimal::new(100, 1)), (1, Decimal::new(50, 1))],
        ));

        let details = place(&db, command(user_id, Decimal::new(250, 1), true))
            .await
            .unwrap();

        assert_eq!(details.items.len(), 2);
        assert_eq!(details.items_total(), Some(Decimal::new(25, 0)));
        assert_eq!(details.items[0].quantity, 2);
        assert_eq!(details.items[0].unit_price, Decimal::new(10, 0));

        let store = db.snapshot();
        assert!(store.cart.iter().all(|l| l.user_id != user_id));
    }

    #[tokio::test]
    async fn other_users_cart_is_untouched() {
        let user_id = Uuid::new_v4();
        let neighbour = Uuid::new_v4();
        let mut store = store_with_cart(user_id, vec![(1, Decimal::ONE)]);
        let product = *store.products.iter().next().unwrap();
        store.users.insert(neighbour);
        store.cart.push(line(neighbour, product, 3, Decimal::ONE));
        let db = FakeDb::new(store);

        place(&db, command(user_id, Decimal::ONE, true))
            .await
            .unwrap();

        let store = db.snapshot();
        assert_eq!(store.cart.len(), 1);
        assert_eq!(store.cart[0].user_id, neighbour);
    }

    #[tokio::test]
    async fn empty_cart_allowed_creates_bare_order() {
        let user_id = Uuid::new_v4();
        let db = FakeDb::new(store_with_cart(user_id, vec![]));

        let details = place(&db, command(user_id, Decimal::ZERO, true))
            .await
            .unwrap();

        assert!(details.items.is_empty());
        assert_eq!(db.snapshot().orders.len(), 1);
        assert!(!db.log().contains(&"insert_items"));
    }

    // =====================================================
    // Rollback paths
    // =====================================================

    #[tokio::test]
    async fn item_insert_failure_rolls_everything_back() {
        let user_id = Uuid::new_v4();
        let db = FakeDb::new(store_with_cart(
            user_id,
            vec![(1, Decimal::ONE), (2, Decimal::TWO)],
        ))
        .failing_at(FailAt::InsertItems);

        let err = place(&db, command(user_id, Decimal::new(5, 0), true))
            .await
            .unwrap_err();

        assert!(matches!(err, CheckoutError::DatabaseError(_)));
        let store = db.snapshot();
        assert!(store.orders.is_empty());
        assert!(store.order_items.is_empty());
        assert_eq!(store.cart.len(), 2);
        assert_eq!(db.log().last(), Some(&"rollback"));
    }

    #[tokio::test]
    async fn cart_delete_failure_rolls_back() {
        let user_id = Uuid::new_v4();
        let db = FakeDb::new(store_with_cart(user_id, vec![(1, Decimal::ONE)]))
            .failing_at(FailAt::DeleteCart);

        assert!(place(&db, command(user_id, Decimal::ONE, true)).await.is_err());

        let store = db.snapshot();
        assert!(store.orders.is_empty());
        assert_eq!(store.cart.len(), 1);
    }

    #[tokio::test]
    async fn commit_failure_leaves_nothing_behind() {
        let user_id = Uuid::new_v4();
        let db = FakeDb::new(store_with_cart(user_id, vec![(1, Decimal::ONE)]))
            .failing_at(FailAt::Commit);

        let err = place(&db, command(user_id, Decimal::ONE, true))
            .await
            .unwrap_err();

        assert!(matches!(err, CheckoutError::DatabaseError(_)));
        assert!(db.snapshot().orders.is_empty());
    }

    #[tokio::test]
    async fn unknown_user_rolls_back_before_insert() {
        let db = FakeDb::new(Store::default());

        let err = place(&db, command(Uuid::new_v4(), Decimal::ONE, true))
            .await
            .unwrap_err();

        assert_eq!(err, CheckoutError::UserNotFound);
        assert_eq!(db.log(), vec!["begin", "lock_user", "rollback"]);
    }

    #[tokio::test]
    async fn empty_cart_rejected_when_disallowed() {
        let user_id = Uuid::new_v4();
        let db = FakeDb::new(store_with_cart(user_id, vec![]));

        let err = place(&db, command(user_id, Decimal::ZERO, false))
            .await
            .unwrap_err();

        assert_eq!(err, CheckoutError::EmptyCart);
        assert!(db.snapshot().orders.is_empty());
        assert_eq!(db.log().last(), Some(&"rollback"));
    }

    #[tokio::test]
    async fn orphaned_cart_line_rolls_back_checkout() {
        let user_id = Uuid::new_v4();
        let mut store = store_with_cart(user_id, vec![(1, Decimal::ONE)]);
        let gone = Uuid::new_v4();
        store.cart.push(line(user_id, gone, 1, Decimal::ONE));
        let db = FakeDb::new(store);

        let err = place(&db, command(user_id, Decimal::TWO, true))
            .await
            .unwrap_err();

        assert_eq!(err, CheckoutError::ProductUnavailable(vec![gone]));
        let store = db.snapshot();
        assert!(store.orders.is_empty());
        assert_eq!(store.cart.len(), 2);
    }
}

pub mod order_query;
pub mod order_repository;
pub mod order_transaction;

pub use order_query::{OrderDetails, OrderItemRecord, OrderQuery, OrderQueryError, OrderRecord};
pub use order_repository::{OrderRepository, OrderRepositoryError};
pub use order_transaction::{CheckoutError, OrderTransaction, PlaceOrderCommand};

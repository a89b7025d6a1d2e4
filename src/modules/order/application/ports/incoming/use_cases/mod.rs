pub mod order_queries;
pub mod place_order;
pub mod update_order_status;

pub use order_queries::{
    GetOrderUseCase, ListAllOrdersUseCase, ListCustomerOrdersUseCase, OrderQueryUseCaseError,
    Requester,
};
pub use place_order::{PlaceOrderError, PlaceOrderInput, PlaceOrderUseCase};
pub use update_order_status::{UpdateOrderStatusError, UpdateOrderStatusUseCase};

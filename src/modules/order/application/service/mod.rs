pub mod order_query_service;
pub mod place_order_service;
pub mod update_order_status_service;

pub use order_query_service::OrderQueryService;
pub use place_order_service::PlaceOrderService;
pub use update_order_status_service::UpdateOrderStatusService;

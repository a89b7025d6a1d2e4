pub mod get_order;
pub mod list_orders;
pub mod place_order;
pub mod update_order_status;

pub use get_order::__path_get_order_handler;
pub use get_order::get_order_handler;
pub use list_orders::{__path_list_all_orders_handler, __path_list_my_orders_handler};
pub use list_orders::{list_all_orders_handler, list_my_orders_handler, OrderListQuery};
pub use place_order::__path_place_order_handler;
pub use place_order::place_order_handler;
pub use update_order_status::__path_update_order_status_handler;
pub use update_order_status::update_order_status_handler;

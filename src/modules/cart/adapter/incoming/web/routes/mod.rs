pub mod cart;

pub use cart::{
    __path_add_cart_item_handler, __path_clear_cart_handler, __path_list_cart_handler,
    __path_remove_cart_item_handler, __path_update_cart_item_handler,
};
pub use cart::{
    add_cart_item_handler, clear_cart_handler, list_cart_handler, remove_cart_item_handler,
    update_cart_item_handler,
};

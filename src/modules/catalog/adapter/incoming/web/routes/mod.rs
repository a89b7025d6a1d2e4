pub mod categories;
pub mod products;

pub use categories::{
    __path_create_category_handler, __path_delete_category_handler, __path_list_categories_handler,
    __path_update_category_handler,
};
pub use categories::{
    create_category_handler, delete_category_handler, list_categories_handler,
    update_category_handler,
};
pub use products::{
    __path_create_product_handler, __path_delete_product_handler, __path_get_product_handler,
    __path_list_products_handler, __path_update_product_handler,
};
pub use products::{
    create_product_handler, delete_product_handler, get_product_handler, list_products_handler,
    update_product_handler,
};

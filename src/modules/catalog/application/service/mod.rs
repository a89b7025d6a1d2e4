pub mod catalog_query_service;
pub mod category_command_service;
pub mod product_command_service;

pub use catalog_query_service::CatalogQueryService;
pub use category_command_service::CategoryCommandService;
pub use product_command_service::ProductCommandService;

pub mod catalog_query_postgres;
pub mod category_repository_postgres;
pub mod product_repository_postgres;
pub mod sea_orm_entity;

pub use catalog_query_postgres::{existing_product_ids, CatalogQueryPostgres};
pub use category_repository_postgres::CategoryRepositoryPostgres;
pub use product_repository_postgres::ProductRepositoryPostgres;

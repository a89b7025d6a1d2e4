pub mod catalog_query;
pub mod category_repository;
pub mod product_repository;

pub use catalog_query::{CatalogQuery, CatalogQueryError, CatalogReader};
pub use category_repository::{
    CategoryData, CategoryRecord, CategoryRepository, CategoryRepositoryError,
};
pub use product_repository::{ProductData, ProductRecord, ProductRepository, ProductRepositoryError};
